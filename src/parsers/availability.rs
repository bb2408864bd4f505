use once_cell::sync::Lazy;
use regex::Regex;

static AVAILABILITY_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*availability:")
        .expect("Invalid availability label regex")
});

/// Strip the leading `Availability:` label from a stock line.
pub fn strip_availability_label(raw: &str) -> String {
    AVAILABILITY_LABEL.replace(raw, "").trim().to_string()
}

pub fn is_in_stock(availability_text: &str) -> bool {
    availability_text.trim().to_lowercase().contains("in stock")
}
