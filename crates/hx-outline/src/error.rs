//! Error types for export formatting.

use thiserror::Error;

/// Errors raised while formatting an export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The result could not be serialized to JSON.
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for export formatting.
pub type Result<T> = std::result::Result<T, ExportError>;
