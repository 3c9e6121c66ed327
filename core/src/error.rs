//! Error types for the ftpcalc-core library.
//!
//! Malformed input and not-found are ordinary negative results in the
//! domain layer (a `false` or a `None`), never errors. This type covers
//! the persistence path only.

use thiserror::Error;

/// Result type alias for ftpcalc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or saving stored values.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Recent-values store error.
    #[error("Store error: {0}")]
    Store(String),
}
