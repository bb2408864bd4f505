use async_trait::async_trait;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::models::ProductRecord;
use crate::storage::CatalogSink;

/// Pretty-printed JSON array of records, in the order given.
///
/// serde_json leaves `/` unescaped, so image URLs stay readable.
pub fn to_json(records: &[ProductRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize catalog")
}

pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSink for JsonFileSink {
    async fn write(&self, records: &[ProductRecord]) -> Result<()> {
        let json = to_json(records)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        info!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
