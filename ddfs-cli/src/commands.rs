use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use ddfs_core::uri::{is_tag_uri, tag_name_of};
use ddfs_core::{DdfsClient, HttpTransport};
use ddfs_types::{BlobSet, Config, SubmitResponse, Uri};

use crate::cli::{Cli, Commands};

pub async fn run(cli: Cli) -> Result<()> {
    let http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(cli.connect_timeout))
        .build()
        .context("Failed to build HTTP client")?;
    let config = Config::new(cli.host, cli.port);
    tracing::debug!("Using master {}:{}", config.master_host, config.master_port);
    let client = DdfsClient::with_transport(config, HttpTransport::new(http));

    match cli.command {
        Commands::Tag { name, json } => show_tag(&client, &name, json).await,
        Commands::Blobs { name, json } => list_blobs(&client, &name, json).await,
        Commands::Size { urls } => blob_size(&client, &urls).await,
        Commands::Submit { file, timeout_secs } => {
            submit_job(&client, &file, timeout_secs.map(Duration::from_secs)).await
        },
    }
}

/// Accept both `name` and `tag://name`.
fn tag_name(arg: &str) -> &str {
    match Uri::parse(arg) {
        Ok(uri) if is_tag_uri(&uri) => {
            let name = tag_name_of(&uri);
            &arg[arg.len() - name.len()..]
        },
        _ => arg,
    }
}

async fn show_tag(client: &DdfsClient, name: &str, json: bool) -> Result<()> {
    let tag = client.resolve_tag(tag_name(name)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tag)?);
        return Ok(());
    }

    println!("{} {}", "Tag:".bold(), tag.id);
    println!("{} {}", "Last modified:".bold(), tag.last_modified);

    if tag.replica_groups.is_empty() {
        println!("{}", "No blobs.".yellow());
        return Ok(());
    }

    for (idx, group) in tag.replica_groups.iter().enumerate() {
        println!("{}", format!("[{}]", idx).cyan());
        for replica in group {
            println!("    {}", replica);
        }
    }
    Ok(())
}

async fn list_blobs(client: &DdfsClient, name: &str, json: bool) -> Result<()> {
    let tag = client.resolve_tag(tag_name(name)).await?;
    let sizes = client.tag_blob_sizes(&tag).await;

    if json {
        let rows: Vec<_> = tag
            .replica_groups
            .iter()
            .zip(&sizes)
            .map(|(group, size)| serde_json::json!({ "replicas": group, "size": size }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Preferred replica", "Replicas", "Size"]);

    for (idx, (group, size)) in tag.replica_groups.iter().zip(&sizes).enumerate() {
        table.add_row(vec![
            Cell::new(idx),
            Cell::new(group.preferred()),
            Cell::new(group.len()),
            size_cell(*size),
        ]);
    }

    println!("{table}");
    let known: u64 = sizes.iter().flatten().sum();
    let unknown = sizes.iter().filter(|s| s.is_none()).count();
    println!("\n{} blobs, {} bytes known, {} unknown", sizes.len(), known, unknown);
    Ok(())
}

fn size_cell(size: Option<u64>) -> Cell {
    match size {
        Some(bytes) => Cell::new(bytes),
        None => Cell::new("unknown").fg(Color::Yellow),
    }
}

async fn blob_size(client: &DdfsClient, urls: &[String]) -> Result<()> {
    let replicas = urls.iter().map(|u| Uri::parse(u)).collect::<Result<Vec<_>, _>>()?;
    let blobset = BlobSet::new(replicas).context("At least one replica URL is required")?;

    match client.blob_size(&blobset).await {
        Some(size) => println!("{}", size),
        None => println!("{}", "unknown".yellow()),
    }
    Ok(())
}

async fn submit_job(client: &DdfsClient, file: &Path, timeout: Option<Duration>) -> Result<()> {
    let payload = read_payload(file)?;

    match client.submit(payload, timeout).await? {
        SubmitResponse::Ok { job_id } => {
            println!("{} Job submitted: {}", "✓".green(), job_id.green());
            Ok(())
        },
        SubmitResponse::Error { message } => anyhow::bail!("Master rejected job: {}", message),
        SubmitResponse::Unknown { raw } => {
            println!("{} Unrecognised reply from master: {}", "?".yellow(), raw);
            Ok(())
        },
    }
}

fn read_payload(file: &Path) -> Result<Vec<u8>> {
    std::fs::read(file).with_context(|| format!("Failed to read job package {}", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_tag_name_accepts_uri_or_name() {
        assert_eq!(tag_name("data:chekhov"), "data:chekhov");
        assert_eq!(tag_name("tag://data:chekhov"), "data:chekhov");
        assert_eq!(tag_name("tag:results"), "results");
    }

    #[test]
    fn test_read_payload() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"\x00jobpack\xff").expect("write");
        assert_eq!(read_payload(file.path()).expect("readable"), b"\x00jobpack\xff");

        let missing = file.path().with_extension("missing");
        let err = read_payload(&missing).expect_err("missing file");
        assert!(err.to_string().contains("Failed to read job package"));
    }
}
