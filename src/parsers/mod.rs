pub mod availability;
pub mod capacity;
pub mod price;
pub mod shipping;

pub use availability::*;
pub use capacity::*;
pub use price::*;
pub use shipping::*;

use crate::models::DataWarning;

/// A normalized value plus the data-quality warning raised while producing it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub warning: Option<DataWarning>,
}

impl<T> Parsed<T> {
    pub fn clean(value: T) -> Self {
        Self { value, warning: None }
    }

    pub fn flagged(value: T, warning: DataWarning) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }
}

/// Collapse whitespace runs and trim.
///
/// Input is DOM text that `scraper` has already entity-decoded, so it is not
/// decoded a second time.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
