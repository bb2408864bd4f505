use chrono::NaiveDate;
use serde::Serialize;

use super::DataWarning;
use crate::parsers::{
    is_in_stock, parse_capacity_mb, parse_price, parse_shipping_date, strip_availability_label,
};

/// Text exactly as read from one colour variant of a product container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProduct {
    pub title: String,
    pub price: String,
    pub image_url: String,
    pub capacity: String,
    pub colour: String,
    pub availability: String,
    pub shipping: String,
}

/// A normalized product variant. Built once by [`ProductRecord::from_raw`] and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    title: String,
    price: f64,
    image_url: String,
    #[serde(rename = "capacityMB")]
    capacity_mb: u64,
    colour: String,
    availability_text: String,
    is_available: bool,
    shipping_text: String,
    shipping_date: Option<NaiveDate>,
}

/// Identity of a variant: title and colour compared case-insensitively, plus capacity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    title: String,
    capacity_mb: u64,
    colour: String,
}

impl ProductRecord {
    /// Normalize raw scraped text into a record.
    ///
    /// Never fails: malformed fields fall back to 0, empty or `None`, and
    /// every fallback is reported in the returned warnings.
    pub fn from_raw(raw: &RawProduct, today: NaiveDate) -> (Self, Vec<DataWarning>) {
        let mut warnings = Vec::new();

        let title = raw.title.trim().to_string();
        if title.is_empty() {
            warnings.push(DataWarning::EmptyTitle);
        }

        let price = parse_price(&raw.price);
        let capacity = parse_capacity_mb(&raw.capacity);
        let shipping_date = parse_shipping_date(&raw.shipping, today);
        warnings.extend(
            [price.warning, capacity.warning, shipping_date.warning]
                .into_iter()
                .flatten(),
        );

        let availability_text = strip_availability_label(&raw.availability);
        let is_available = is_in_stock(&availability_text);

        let record = Self {
            title,
            price: price.value,
            image_url: raw.image_url.trim().to_string(),
            capacity_mb: capacity.value,
            colour: raw.colour.trim().to_lowercase(),
            availability_text,
            is_available,
            shipping_text: raw.shipping.trim().to_string(),
            shipping_date: shipping_date.value,
        };

        (record, warnings)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn capacity_mb(&self) -> u64 {
        self.capacity_mb
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn availability_text(&self) -> &str {
        &self.availability_text
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn shipping_text(&self) -> &str {
        &self.shipping_text
    }

    pub fn shipping_date(&self) -> Option<NaiveDate> {
        self.shipping_date
    }

    pub fn variant_key(&self) -> VariantKey {
        VariantKey {
            title: self.title.to_lowercase(),
            capacity_mb: self.capacity_mb,
            colour: self.colour.to_lowercase(),
        }
    }

    pub fn is_same_variant(&self, other: &ProductRecord) -> bool {
        self.variant_key() == other.variant_key()
    }

    /// Title, colour and capacity concatenated; output is ordered by this string.
    pub fn sort_key(&self) -> String {
        format!("{}{}{}", self.title, self.colour, self.capacity_mb)
    }
}
