use std::fmt;

/// Non-fatal data-quality issue found while normalizing scraped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    EmptyTitle,
    NegativePrice { raw: String },
    NegativeCapacity { raw: String },
    UnrecognizedCapacity { raw: String },
    UnparseableShippingDate { raw: String },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataWarning::EmptyTitle => write!(f, "product has an empty title"),
            DataWarning::NegativePrice { raw } => {
                write!(f, "negative price '{}' clamped to 0", raw)
            }
            DataWarning::NegativeCapacity { raw } => {
                write!(f, "negative capacity '{}' replaced with 0", raw)
            }
            DataWarning::UnrecognizedCapacity { raw } => {
                write!(f, "unrecognized capacity format '{}'", raw)
            }
            DataWarning::UnparseableShippingDate { raw } => {
                write!(f, "could not parse a shipping date from '{}'", raw)
            }
        }
    }
}
