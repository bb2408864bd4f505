use crate::models::DataWarning;

use super::Parsed;

/// Parse a displayed price such as `£399.99` into a non-negative amount.
///
/// Everything except digits and the decimal point is discarded. A minus sign
/// ahead of the first digit marks the value as negative, which is clamped to
/// zero and flagged.
pub fn parse_price(raw: &str) -> Parsed<f64> {
    let numeric: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let amount = numeric.parse::<f64>().unwrap_or(0.0);
    let rounded = (amount * 100.0).round() / 100.0;

    if is_negative(raw) && rounded > 0.0 {
        return Parsed::flagged(
            0.0,
            DataWarning::NegativePrice {
                raw: raw.trim().to_string(),
            },
        );
    }

    Parsed::clean(rounded)
}

fn is_negative(raw: &str) -> bool {
    raw.chars()
        .take_while(|c| !c.is_ascii_digit())
        .any(|c| c == '-')
}
