pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
pub mod scrapers;
pub mod storage;
pub mod utils;

pub use crate::config::Config;
pub use error::ScrapeError;
pub use models::{Catalog, DataWarning, ProductRecord, RawProduct, VariantKey};
pub use scrapers::{CatalogScraper, PageExtractor, PageFailure, PageFetcher, ScrapeOutcome};
pub use storage::{CatalogSink, JsonFileSink};
pub use utils::http::HttpPageFetcher;
