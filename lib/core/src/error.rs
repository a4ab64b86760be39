use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Insufficient data for {metric}: need at least {required} observations, got {actual}")]
    InsufficientData {
        metric: String,
        required: usize,
        actual: usize,
    },

    #[error("Degenerate input: {0}")]
    DegenerateInput(Degeneracy),

    #[error("{metric} supports at most {max} features, got {actual}")]
    UnsupportedDimension {
        metric: String,
        max: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// True when the error only says the metric is undefined for this data
    /// (zero spread), as opposed to the data or call being invalid.
    pub fn is_degenerate_variance(&self) -> bool {
        matches!(self, Error::DegenerateInput(Degeneracy::ZeroVariance { .. }))
    }

    pub fn insufficient(metric: &str, required: usize, actual: usize) -> Self {
        Error::InsufficientData {
            metric: metric.to_string(),
            required,
            actual,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Why a sample cannot be scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    /// A NaN or infinite value at the given observation and feature.
    NonFinite { row: usize, feature: usize },
    /// A feature has no spread where the metric divides by it.
    ZeroVariance { feature: usize },
    /// Finite inputs whose magnitude overflows the computation.
    Overflow,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::NonFinite { row, feature } => {
                write!(f, "non-finite value at row {}, feature {}", row, feature)
            }
            Degeneracy::ZeroVariance { feature } => {
                write!(f, "zero variance in feature {}", feature)
            }
            Degeneracy::Overflow => write!(f, "values too large to score"),
        }
    }
}
