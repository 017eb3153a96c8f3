//! Session error types.

use hx_outline::{ExportError, SinkError};
use thiserror::Error;

use crate::session::SessionStatus;

/// Message stored when the selected file is not a PDF.
pub const INVALID_FILE_MESSAGE: &str = "Please select a PDF file";

/// Errors returned by [`SessionController`](crate::SessionController)
/// operations.
///
/// Extraction failures are not errors of the controller: they move the
/// session into [`SessionStatus::Error`] and are read back from the session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// The selected file was rejected before any network activity.
    #[error("{message}")]
    Validation {
        /// User-facing message.
        message: String,
    },

    /// The operation is not allowed in the current state.
    #[error("cannot {operation} while {status}")]
    InvalidTransition {
        /// Operation that was attempted.
        operation: &'static str,
        /// Status at the time.
        status: SessionStatus,
    },

    /// Export requested with no extraction result.
    #[error("no extraction result to export")]
    NoResult,

    /// Formatting the export failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The export sink failed.
    #[error("export failed: {0}")]
    Sink(#[from] SinkError),
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
