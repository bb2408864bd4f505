use async_trait::async_trait;
use anyhow::Result;
use crate::models::ProductRecord;

mod json;
pub use json::{to_json, JsonFileSink};

/// Destination for the finished, sorted catalog.
#[async_trait]
pub trait CatalogSink: Send + Sync {
    async fn write(&self, records: &[ProductRecord]) -> Result<()>;
}
