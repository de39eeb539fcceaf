use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ddfs",
    about = "DDFS client - resolve tags, size blobs, submit jobs",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, env = "DISCO_MASTER_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(short, long, global = true, env = "DISCO_PORT", default_value = "8989")]
    pub port: u16,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    #[arg(long, global = true, default_value = "10", help = "TCP connect timeout in seconds")]
    pub connect_timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Show a tag and its replica groups")]
    Tag {
        #[arg(help = "Tag name or tag:// URI")]
        name: String,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "List the blobs of a tag with their sizes")]
    Blobs {
        #[arg(help = "Tag name or tag:// URI")]
        name: String,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Size of one blob, asking its replicas in order")]
    Size {
        #[arg(required = true, help = "Replica URLs, preferred first")]
        urls: Vec<String>,
    },

    #[command(about = "Submit a pre-built job package to the master")]
    Submit {
        #[arg(help = "Path to the job package")]
        file: PathBuf,

        #[arg(long, help = "Give up after this many seconds")]
        timeout_secs: Option<u64>,
    },
}
