use anyhow::Result;
use chrono::Local;
use tracing::{info, warn};

use catalog_scraper::utils::http::create_client;
use catalog_scraper::{
    CatalogScraper, CatalogSink, Config, HttpPageFetcher, JsonFileSink, PageExtractor,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalog_scraper=info".parse()?),
        )
        .init();

    info!("Starting catalog scrape");

    let config = Config::load()?;
    info!("Scraping {}", config.base_url);

    let client = create_client(&config)?;
    let fetcher = HttpPageFetcher::new(client, &config.base_url, config.fetch_attempts)?;
    let extractor = PageExtractor::new(Some(fetcher.base_url().clone()), Local::now().date_naive());

    let outcome = CatalogScraper::new(fetcher, extractor).run().await;

    for failure in &outcome.failures {
        warn!("Page {} was skipped: {}", failure.page, failure.reason);
    }

    let sink = JsonFileSink::new(&config.output_path);
    sink.write(&outcome.records).await?;

    info!(
        "Done: {} products from {} page fetches",
        outcome.records.len(),
        outcome.pages_attempted
    );

    Ok(())
}
