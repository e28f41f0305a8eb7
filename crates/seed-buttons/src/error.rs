//! Error types for button extraction.
//!
//! Extraction itself is total; these only cover the I/O wrappers around it.

use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors from loading exports or serializing descriptors.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The export payload could not be loaded.
    #[error("Failed to load export: {0}")]
    Export(#[from] seed_figma::FigmaError),

    /// Descriptors could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
