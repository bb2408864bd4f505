use async_trait::async_trait;

use crate::error::ScrapeError;

mod catalog;
mod page;
mod pagination;
pub mod selectors;

pub use catalog::{CatalogScraper, PageFailure, ScrapeOutcome};
pub use page::{PageExtraction, PageExtractor};
pub use pagination::discover_pages;

/// Source of listing page HTML, addressed by page number.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<String, ScrapeError>;
}
