//! `ddfs` - command-line client for a DDFS master.
//!
//! Resolves tags, reports blob sizes and submits job packages. The master
//! address comes from `--host`/`--port` or `DISCO_MASTER_HOST`/`DISCO_PORT`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    commands::run(cli).await
}
