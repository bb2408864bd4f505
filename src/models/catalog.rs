use std::collections::HashSet;

use super::{ProductRecord, VariantKey};

/// Accumulated records for one run, in first-seen order.
///
/// A variant already present is never replaced, so the first record seen
/// for a title/capacity/colour combination wins even if a later page lists
/// it at a different price.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    seen: HashSet<VariantKey>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the record duplicates a variant already held.
    pub fn insert(&mut self, record: ProductRecord) -> bool {
        if !self.seen.insert(record.variant_key()) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn into_sorted(self) -> Vec<ProductRecord> {
        let mut records = self.records;
        records.sort_by_cached_key(ProductRecord::sort_key);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawProduct;
    use chrono::NaiveDate;

    fn record(title: &str, capacity: &str, colour: &str, price: &str) -> ProductRecord {
        let raw = RawProduct {
            title: title.to_string(),
            price: price.to_string(),
            capacity: capacity.to_string(),
            colour: colour.to_string(),
            ..RawProduct::default()
        };
        ProductRecord::from_raw(&raw, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()).0
    }

    #[test]
    fn case_variants_are_duplicates() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(record("Phone", "64GB", "red", "£10")));
        assert!(!catalog.insert(record("PHONE", "64GB", "RED", "£10")));
        assert!(catalog.insert(record("Phone", "64GB", "blue", "£10")));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn first_seen_price_wins() {
        let mut catalog = Catalog::new();
        catalog.insert(record("Phone", "64GB", "red", "£10"));
        catalog.insert(record("Phone", "64GB", "red", "£20"));

        assert_eq!(catalog.records().len(), 1);
        assert_eq!(catalog.records()[0].price(), 10.0);
    }

    #[test]
    fn sorts_by_title_then_colour_then_capacity_text() {
        let mut catalog = Catalog::new();
        catalog.insert(record("iPhone 12", "64GB", "white", "£1"));
        catalog.insert(record("Galaxy", "128GB", "black", "£1"));
        catalog.insert(record("iPhone 12", "64GB", "black", "£1"));
        catalog.insert(record("iPhone 12", "128GB", "black", "£1"));

        let keys: Vec<String> = catalog
            .into_sorted()
            .iter()
            .map(ProductRecord::sort_key)
            .collect();

        assert_eq!(
            keys,
            vec![
                "Galaxyblack128000",
                "iPhone 12black128000",
                "iPhone 12black64000",
                "iPhone 12white64000",
            ]
        );
    }

    #[test]
    fn empty_catalog_sorts_to_nothing() {
        assert!(Catalog::new().into_sorted().is_empty());
    }
}
