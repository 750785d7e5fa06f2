//! Collation error types

use thiserror::Error;

/// Errors raised by the collation engine
///
/// Comparison and canonicalization themselves are total; these errors only
/// surface from the strict tokenizer API and from configuration parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollationError {
    /// A token was requested after the terminal `End` token was delivered
    #[error("read past end of token stream")]
    ReadPastEnd,

    /// Unknown case ordering name
    #[error("unknown case ordering '{0}' (expected 'honored' or 'legacy')")]
    InvalidCaseOrdering(String),
}

/// Result type for collation operations
pub type Result<T> = std::result::Result<T, CollationError>;
