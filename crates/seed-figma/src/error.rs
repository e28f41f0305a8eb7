//! Error types for seed-figma.

use thiserror::Error;

/// Result type for seed-figma operations.
pub type Result<T> = std::result::Result<T, FigmaError>;

/// Errors that can occur while loading a design-tool export.
#[derive(Debug, Error)]
pub enum FigmaError {
    /// The payload is not valid JSON or does not fit the node model.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is valid JSON but not an object.
    #[error("invalid export: {0}")]
    InvalidExport(String),
}

impl FigmaError {
    /// Create an invalid export error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidExport(message.into())
    }
}
