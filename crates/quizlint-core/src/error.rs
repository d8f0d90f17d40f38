//! # Error Types
//!
//! Errors raised by the shared quizlint types. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Validation findings are NOT errors in this sense — a quiz file failing
//! its checks is recorded in the report as data. `CoreError` covers the
//! machinery around the report itself: serializing it and writing the
//! artifact to disk.

use thiserror::Error;

/// Errors from report serialization and IO.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Report serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error while writing the report artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
