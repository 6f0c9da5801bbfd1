//! wiki-search command line entry point.
//!
//! Runs one adapter call and prints the resulting page as JSON on stdout.
//! Logging goes to stderr so the output stays machine-readable.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wiki_search_client::ResultAdapter;
use wiki_search_core::AppConfig;

/// Search Wikipedia and print a normalized result page.
#[derive(Debug, Parser)]
#[command(name = "wiki-search", version, about)]
struct Cli {
    /// Free-text query. Blank queries print the empty page without a request.
    query: String,

    /// Zero-based result offset (use the previous page's `nextOffset`).
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Page size; defaults to the configured `default_limit`.
    #[arg(long)]
    limit: Option<u32>,

    /// Skip the extract lookup; descriptions fall back to cleaned snippets.
    #[arg(long)]
    no_enrich: bool,

    /// Skip the pacing delay before the search request.
    #[arg(long)]
    no_delay: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().context("loading configuration")?;
    if cli.no_enrich {
        config.enrich_descriptions = false;
    }
    if cli.no_delay {
        config.pacing_delay_ms = 0;
    }

    tracing::debug!(endpoint = %config.endpoint, "starting wiki-search");

    let limit = cli.limit.unwrap_or(config.default_limit);
    let adapter = ResultAdapter::new(config)?;
    let page = adapter.fetch_page(&cli.query, cli.offset, limit).await;

    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
