//! Unified error types for the domain layer
//!
//! Every generation error is a caller-input error. They are all detected while
//! validating a request, before any randomness is drawn, so a failed call never
//! produces partial output.

use thiserror::Error;

/// Why a generation request was rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    /// Bounds are inverted, empty, or not finite
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Requested count is outside the allowed bounds for the operation
    #[error("{}", count_message(.count, .min, .max))]
    InvalidCount { count: i64, min: i64, max: i64 },

    /// Precision out of bounds, or too coarse for the requested range
    #[error("Invalid precision: {0}")]
    InvalidPrecision(String),

    /// Requested length is outside the allowed bounds for the operation
    #[error("Length must be between {min} and {max}, got {length}")]
    InvalidLength { length: i64, min: i64, max: i64 },

    #[error("Encoding must be 'hex' or 'base64', got '{0}'")]
    InvalidEncoding(String),

    #[error("Format must be 'standard' or 'compact', got '{0}'")]
    InvalidFormat(String),

    #[error(
        "Invalid charset: '{0}' (expected alphanumeric, alphabetic, numeric, hex, base64 or ascii_printable)"
    )]
    InvalidCharset(String),

    #[error("Choices array cannot be empty")]
    EmptyChoices,

    /// More unique picks requested than there are choices
    #[error("Cannot select {requested} unique items from {available} choices")]
    DuplicatesRequestedExceedPoolSize { requested: i64, available: usize },

    #[error("Probability must be between 0.0 and 1.0, got {0}")]
    InvalidProbability(f64),
}

fn count_message(count: &i64, min: &i64, max: &i64) -> String {
    if *max == i64::MAX {
        format!("Count must be at least {min}, got {count}")
    } else {
        format!("Count must be between {min} and {max}, got {count}")
    }
}

impl GenerationError {
    /// Create an invalid range error
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Create an invalid precision error
    pub fn invalid_precision(msg: impl Into<String>) -> Self {
        Self::InvalidPrecision(msg.into())
    }

    /// Stable snake_case identifier for the error, used in protocol error data.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRange(_) => "invalid_range",
            Self::InvalidCount { .. } => "invalid_count",
            Self::InvalidPrecision(_) => "invalid_precision",
            Self::InvalidLength { .. } => "invalid_length",
            Self::InvalidEncoding(_) => "invalid_encoding",
            Self::InvalidFormat(_) => "invalid_format",
            Self::InvalidCharset(_) => "invalid_charset",
            Self::EmptyChoices => "empty_choices",
            Self::DuplicatesRequestedExceedPoolSize { .. } => {
                "duplicates_requested_exceed_pool_size"
            }
            Self::InvalidProbability(_) => "invalid_probability",
        }
    }
}
