use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use notion_flashcards::config;
use notion_flashcards::exporter::Exporter;
use notion_flashcards::notion::NotionClient;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Export flashcards from a Notion lesson database and exit"
)]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout carries the flashcard lines; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load(Some(&args.config))?;

    let token = std::env::var("NOTION_TOKEN").unwrap_or_else(|_| cfg.notion.token.clone());
    let client = NotionClient::new(token, cfg.notion.version.clone());
    let exporter = Exporter::new(&client, &cfg.notion.base_url, cfg.export.page_size);

    let mut out = std::io::stdout();
    let pages = exporter.run(&cfg.notion.database_id, &mut out).await?;

    let processed = pages.iter().filter(|p| p.processed).count();
    info!(pages = pages.len(), processed, "export finished");
    Ok(())
}
