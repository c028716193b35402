//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a trace document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed trace document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("Trace document schema violation: {0}")]
    SchemaViolation(String),

    #[error("Failed to read trace file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
