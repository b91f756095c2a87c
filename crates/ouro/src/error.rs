//! Error types for Ouro operations.
//!
//! The traversal core is total over a well-formed relationship table and
//! never fails; every error here is a boundary concern raised while the
//! table is loaded or validated, before any chain is walked.

use thiserror::Error;

/// Result type for Ouro operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for Ouro operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the relationship table file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The relationship table file is not valid JSON
    #[error("invalid table file: {0}")]
    Json(#[from] serde_json::Error),

    /// The relationship table violates its input contract
    /// (blank class name, conflicting duplicate entry)
    #[error("malformed relationship table: {0}")]
    Table(String),

    /// A queried class is not present in the relationship table
    #[error("unknown class: {0}")]
    UnknownClass(String),
}
