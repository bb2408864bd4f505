use tracing::{error, info, warn};

use super::{discover_pages, PageExtraction, PageExtractor, PageFetcher};
use crate::models::{Catalog, ProductRecord};

/// A page that could not be fetched; the run carries on without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub page: u32,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Deduplicated variants in output order.
    pub records: Vec<ProductRecord>,
    pub failures: Vec<PageFailure>,
    pub warnings: usize,
    /// Fetch attempts, the seed page included.
    pub pages_attempted: usize,
}

/// Walks every advertised listing page one at a time and collects unique variants.
pub struct CatalogScraper<F> {
    fetcher: F,
    extractor: PageExtractor,
}

impl<F: PageFetcher> CatalogScraper<F> {
    pub fn new(fetcher: F, extractor: PageExtractor) -> Self {
        Self { fetcher, extractor }
    }

    pub async fn run(&self) -> ScrapeOutcome {
        let mut catalog = Catalog::new();
        let mut outcome = ScrapeOutcome {
            pages_attempted: 1,
            ..Default::default()
        };

        info!("Fetching seed page");
        let seed_html = match self.fetcher.fetch_page(1).await {
            Ok(html) => html,
            Err(e) => {
                error!("Could not fetch seed page: {}", e);
                outcome.failures.push(PageFailure {
                    page: 1,
                    reason: e.to_string(),
                });
                return outcome;
            }
        };

        let pages = discover_pages(&seed_html);
        info!("Discovered {} pages: {:?}", pages.len(), pages);

        outcome.warnings += absorb(&mut catalog, 1, self.extractor.extract(&seed_html));

        // The seed page is listed again here; its variants are all duplicates by now.
        for page in pages {
            outcome.pages_attempted += 1;
            match self.scrape_page(page).await {
                Ok(extraction) => outcome.warnings += absorb(&mut catalog, page, extraction),
                Err(failure) => {
                    error!("Skipping page {}: {}", failure.page, failure.reason);
                    outcome.failures.push(failure);
                }
            }
        }

        info!(
            "Collected {} unique variants ({} warnings, {} failed pages)",
            catalog.len(),
            outcome.warnings,
            outcome.failures.len()
        );

        outcome.records = catalog.into_sorted();
        outcome
    }

    async fn scrape_page(&self, page: u32) -> Result<PageExtraction, PageFailure> {
        let html = self
            .fetcher
            .fetch_page(page)
            .await
            .map_err(|e| PageFailure {
                page,
                reason: e.to_string(),
            })?;

        Ok(self.extractor.extract(&html))
    }
}

/// Adds the page's new variants to the catalog, logging its warnings. Returns the warning count.
fn absorb(catalog: &mut Catalog, page: u32, extraction: PageExtraction) -> usize {
    for warning in &extraction.warnings {
        warn!("Data quality on page {}: {}", page, warning);
    }

    let found = extraction.records.len();
    let mut added = 0;
    for record in extraction.records {
        if catalog.insert(record) {
            added += 1;
        }
    }

    info!("Page {}: {} variants found, {} new", page, found, added);
    extraction.warnings.len()
}
