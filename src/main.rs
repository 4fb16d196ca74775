use crate::config::cli::Args;
use crate::config::Config;
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{FrontPageClient, HackerNewsScraper, Selectors};
use crate::services::listing_service::ListingService;
use crate::services::scraping::ScrapingService;
use clap::Parser;
use std::io::Write;
use tracing::{info, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Field fallback notices are logged under this target, which stays enabled at
/// `warn` whatever `--log-level` says.
const NOTICE_TARGET: &str = "notices";

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&args.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(args)?;
    let selectors = Selectors::new(&config.profile.selectors)?;
    let client = FrontPageClient::new(config.http_client.clone(), config.profile.base_url.clone());
    let scraping = ScrapingService::new(
        client,
        HackerNewsScraper,
        selectors,
        config.profile.page_size,
    );

    let listing = ListingService::new(scraping)
        .fetch(config.args.posts)
        .await?;

    for notice in &listing.notices {
        warn!(target: NOTICE_TARGET, "{notice}");
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(listing.json.as_bytes())?;
    stdout.flush()?;

    info!(
        "Scraping completed successfully! {} record(s) from {} page(s)",
        listing.records, listing.pages_fetched
    );
    Ok(())
}

fn log_filter(level: &str) -> Result<EnvFilter> {
    let notices = format!("{NOTICE_TARGET}=warn")
        .parse::<Directive>()
        .map_err(|e| ScrapeError::Other(format!("invalid log directive: {e}")))?;

    Ok(EnvFilter::try_new(level)
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(notices))
}
