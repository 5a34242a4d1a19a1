//! Core error types (setup-time only)
//!
//! Every error here is raised while options or filters are being built.
//! Tokenizing and filtering individual strings never fails.

use thiserror::Error;

/// Configuration errors surfaced before any string is processed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Interval whose lower bound is not strictly below its upper bound
    #[error("low >= high (got low={low}, high={high})")]
    InvalidInterval {
        /// Offending lower bound
        low: f64,
        /// Offending upper bound
        high: f64,
    },

    /// Interval bound that is not a finite number
    #[error("interval bounds must be finite (got low={low}, high={high})")]
    NonFiniteInterval {
        /// Offending lower bound
        low: f64,
        /// Offending upper bound
        high: f64,
    },

    /// Exclude value that is NaN or infinite
    #[error("exclude values must be finite (got {0})")]
    NonFiniteValue(f64),

    /// Locale name not present in the locale table
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Locale whose separators cannot be used for number parsing
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Options that cannot be combined
    #[error("Conflicting options: {0}")]
    ConflictingOptions(String),

    /// Locale table could not be parsed
    #[error("Locale table error: {0}")]
    LocaleTable(String),
}

impl Error {
    /// Whether this error was caused by an invalid interval
    ///
    /// Bad exclude values are not interval errors.
    pub fn is_interval_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInterval { .. } | Error::NonFiniteInterval { .. }
        )
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
