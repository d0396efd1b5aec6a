//! Error types for planmark.
//!
//! Normalizing and building never fail; only rendering, (de)serialization
//! and file I/O can.

use std::io;
use thiserror::Error;

/// Result type alias for planmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting or rendering documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during rendering (Markdown, text, JSON, DOCX).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Caller-supplied input could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested output format is not available in this build.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}
