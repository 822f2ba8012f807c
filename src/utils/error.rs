//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while building a metrics database
#[derive(Error, Debug)]
pub enum AggregateError {
    /// A builder must own the whole lifetime of its database; attaching to a
    /// partially filled one would leave the lookup index out of sync.
    #[error("Cannot attach builder to a non-empty database ({records} records present)")]
    NonEmptyDatabase { records: usize },
}

/// Errors that can occur during file input/output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Incompatible schema version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: String, found: String },
}
