use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::DataWarning;

use super::Parsed;

// A `-` is a sign only at the start or after whitespace; "Model-64GB" is 64GB.
static CAPACITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:(?:^|\s)(-))?(\d+(?:\.\d+)?)\s*(GB|MB)")
        .expect("Invalid capacity regex")
});

const MB_PER_GB: f64 = 1000.0;

/// Normalize a storage label like `64GB` or `256 MB` to megabytes.
pub fn parse_capacity_mb(raw: &str) -> Parsed<u64> {
    let unrecognized = || {
        Parsed::flagged(
            0,
            DataWarning::UnrecognizedCapacity {
                raw: raw.trim().to_string(),
            },
        )
    };

    let Some(captures) = CAPACITY_REGEX.captures(raw) else {
        return unrecognized();
    };

    let Ok(amount) = captures[2].parse::<f64>() else {
        return unrecognized();
    };

    if captures.get(1).is_some() {
        return Parsed::flagged(
            0,
            DataWarning::NegativeCapacity {
                raw: raw.trim().to_string(),
            },
        );
    }

    let megabytes = if captures[3].eq_ignore_ascii_case("gb") {
        amount * MB_PER_GB
    } else {
        amount
    };

    Parsed::clean(megabytes.round() as u64)
}
