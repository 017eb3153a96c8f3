//! Interpretation of raw service responses.

use hx_model::ExtractionResult;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{ExtractionError, Result};

/// Turn an HTTP status and body into an extraction result.
///
/// Success bodies must decode as an [`ExtractionResult`] and pass its
/// invariant checks. Any other status becomes
/// [`ExtractionError::Service`] carrying the payload's `detail` when present.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<ExtractionResult> {
    if !status.is_success() {
        let detail = error_detail(body);
        tracing::debug!(status = status.as_u16(), ?detail, "extraction service error");
        return Err(ExtractionError::Service {
            status: status.as_u16(),
            detail,
        });
    }

    let result: ExtractionResult = serde_json::from_slice(body)?;
    result.validate()?;
    Ok(result)
}

/// Extract a human-readable `detail` string from an error payload.
///
/// Returns `None` when the body is not JSON, has no `detail`, or carries a
/// non-string `detail` (request validation errors send a list).
#[must_use]
pub fn error_detail(body: &[u8]) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorPayload {
        detail: Option<serde_json::Value>,
    }

    let payload: ErrorPayload = serde_json::from_slice(body).ok()?;
    match payload.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_model::HeadingLevel;

    const OK_BODY: &[u8] = br#"{
        "success": true,
        "filename": "thesis.pdf",
        "title": "On Outlines",
        "outline": [
            {"level": "H1", "text": "Chapter 1", "page": 1},
            {"level": "H3", "text": "A detail", "page": 4}
        ],
        "processing_time": 1.25,
        "total_headings": 2
    }"#;

    #[test]
    fn test_success_decodes() {
        let result = interpret_response(StatusCode::OK, OK_BODY).unwrap();
        assert_eq!(result.filename, "thesis.pdf");
        assert_eq!(result.outline[1].level, HeadingLevel::H3);
        assert_eq!(result.total_headings, 2);
    }

    #[test]
    fn test_error_with_detail() {
        let body = br#"{"detail": "Only PDF files are allowed"}"#;
        let err = interpret_response(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::Service {
                status: 400,
                detail: Some("Only PDF files are allowed".to_string()),
            }
        );
    }

    #[test]
    fn test_error_without_detail_falls_back() {
        let err = interpret_response(StatusCode::BAD_GATEWAY, b"<html>oops</html>").unwrap_err();
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message(), "Failed to process PDF");
    }

    #[test]
    fn test_list_detail_counts_as_absent() {
        let body = br#"{"detail": [{"loc": ["body", "file"], "msg": "field required"}]}"#;
        assert_eq!(error_detail(body), None);
    }

    #[test]
    fn test_success_with_bad_payload() {
        let err = interpret_response(StatusCode::OK, br#"{"filename": "x.pdf"}"#).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidResponse(_)));
    }

    #[test]
    fn test_success_with_inconsistent_total() {
        let body = br#"{
            "filename": "x.pdf",
            "title": "",
            "outline": [],
            "processing_time": 0.0,
            "total_headings": 3
        }"#;
        let err = interpret_response(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidResponse(_)));
    }
}
