//! Error types for quote lookups
//!
//! None of these are fatal: a dashboard shows them as an informational note.

use thiserror::Error;

/// Errors that can occur while looking up a quote
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("Unknown commodity: {0}")]
    UnknownCommodity(String),

    #[error("Market data unavailable: {0}")]
    ExternalDataUnavailable(String),
}

/// Result type for quote lookups
pub type Result<T> = std::result::Result<T, QuoteError>;
