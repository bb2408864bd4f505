use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::DataWarning;

use super::Parsed;

/// Full month names or their abbreviations ("Mar", "Sept", "March").
const MONTHS: &str = "Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?\
                      |Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";
const MONTH_ABBREVIATIONS: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";
const WEEKDAYS: &str = "Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday";

type DateStrategy = fn(&Captures<'_>, NaiveDate) -> Option<NaiveDate>;

/// Tried in order; the first regex that matches is used, and a match that
/// does not form a valid calendar date falls through to the next entry.
static DATE_PATTERNS: Lazy<Vec<(Regex, DateStrategy)>> = Lazy::new(|| {
    let pattern = |source: String| Regex::new(&source).expect("Invalid shipping date regex");

    vec![
        // 25 March 2024, 25 Mar 2024
        (
            pattern(format!(r"(?i)\b(\d{{1,2}})\s+({MONTHS})\s+(\d{{4}})\b")),
            day_month_year as DateStrategy,
        ),
        // 2024-03-25
        (pattern(r"\b(\d{4})-(\d{2})-(\d{2})\b".to_string()), iso_date),
        // Monday 25th March 2024, Saturday 23rd Mar 2024
        (
            pattern(format!(
                r"(?i)\b(?:{WEEKDAYS})\s+(\d{{1,2}})(?:st|nd|rd|th)\s+({MONTHS})\s+(\d{{4}})\b"
            )),
            day_month_year,
        ),
        // 25th March, 1st Apr 2024
        (
            pattern(format!(
                r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)\s+({MONTHS})\b(?:\s+(\d{{4}})\b)?"
            )),
            day_month_optional_year,
        ),
        // 25 Mar 2024
        (
            pattern(format!(
                r"(?i)\b(\d{{1,2}})\s+({MONTH_ABBREVIATIONS})\s+(\d{{4}})\b"
            )),
            day_month_year,
        ),
    ]
});

fn day_month_year(captures: &Captures<'_>, _today: NaiveDate) -> Option<NaiveDate> {
    date_from_parts(&captures[3], &captures[2], &captures[1])
}

/// Uses the trailing year when one is written, otherwise the current year.
fn day_month_optional_year(captures: &Captures<'_>, today: NaiveDate) -> Option<NaiveDate> {
    let year = match captures.get(3) {
        Some(year) => year.as_str().parse().ok()?,
        None => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month_number(&captures[2])?, captures[1].parse().ok()?)
}

fn iso_date(captures: &Captures<'_>, _today: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        captures[1].parse().ok()?,
        captures[2].parse().ok()?,
        captures[3].parse().ok()?,
    )
}

/// Resolve a free-text shipping line to a calendar date.
///
/// `today` anchors relative phrases ("tomorrow", "next day") and the year
/// of dates written without one.
pub fn parse_shipping_date(raw: &str, today: NaiveDate) -> Parsed<Option<NaiveDate>> {
    for (regex, strategy) in DATE_PATTERNS.iter() {
        if let Some(captures) = regex.captures(raw) {
            if let Some(date) = strategy(&captures, today) {
                return Parsed::clean(Some(date));
            }
        }
    }

    let lower = raw.to_lowercase();
    if lower.contains("tomorrow") || lower.contains("next day") {
        return Parsed::clean(today.succ_opt());
    }

    if raw.trim().is_empty() {
        Parsed::clean(None)
    } else {
        Parsed::flagged(
            None,
            DataWarning::UnparseableShippingDate {
                raw: raw.trim().to_string(),
            },
        )
    }
}

fn date_from_parts(year: &str, month_name: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month_number(month_name)?, day.parse().ok()?)
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_lowercase();
    MONTH_ABBREVIATIONS
        .split('|')
        .position(|abbr| abbr.eq_ignore_ascii_case(&prefix))
        .map(|index| index as u32 + 1)
}
