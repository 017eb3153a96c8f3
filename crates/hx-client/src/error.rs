//! Error types for extraction requests.

use thiserror::Error;

/// Message shown when the service gives no usable explanation.
pub const FALLBACK_MESSAGE: &str = "Failed to process PDF";

/// Errors that can occur while extracting headings from a document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractionError {
    /// The service answered with a non-success status.
    #[error("extraction service returned {status}: {}", .detail.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    Service {
        /// HTTP status code.
        status: u16,
        /// `detail` from the structured error payload, if one was sent.
        detail: Option<String>,
    },

    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered successfully but the payload was unusable.
    #[error("invalid response from extraction service: {0}")]
    InvalidResponse(String),
}

impl ExtractionError {
    /// Message suitable for display to the user.
    ///
    /// This is the service's own `detail` when it sent one and
    /// [`FALLBACK_MESSAGE`] otherwise.
    #[must_use]
    pub fn user_message(&self) -> &str {
        self.detail().unwrap_or(FALLBACK_MESSAGE)
    }

    /// The service-provided detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Service { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::InvalidResponse(_) => None,
        }
    }

    /// HTTP status code, for service errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            Self::Network(_) | Self::InvalidResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ExtractionError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ExtractionError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

impl From<hx_model::ModelError> for ExtractionError {
    fn from(err: hx_model::ModelError) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ExtractionError::Service {
            status: 400,
            detail: Some("Only PDF files are allowed".to_string()),
        };
        assert_eq!(err.user_message(), "Only PDF files are allowed");
        assert_eq!(err.status(), Some(400));

        let err = ExtractionError::Service {
            status: 502,
            detail: None,
        };
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);

        let err = ExtractionError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display() {
        let err = ExtractionError::Service {
            status: 500,
            detail: None,
        };
        assert_eq!(
            err.to_string(),
            "extraction service returned 500: Failed to process PDF"
        );
    }
}
