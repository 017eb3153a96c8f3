//! Extraction result for a single document.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::heading::Heading;

/// Structured outline returned by the extraction service.
///
/// Field order matches the service payload and is preserved by the JSON
/// export. Extra fields in the payload (the service also sends
/// `"success": true`) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Name of the uploaded file, as echoed back by the service.
    pub filename: String,
    /// Detected document title. May be empty.
    #[serde(default)]
    pub title: String,
    /// Headings in document order.
    pub outline: Vec<Heading>,
    /// Number of headings reported by the service.
    pub total_headings: usize,
    /// Server-side processing time in seconds.
    pub processing_time: f64,
}

impl ExtractionResult {
    /// Build a result whose `total_headings` matches the outline.
    pub fn new(
        filename: impl Into<String>,
        title: impl Into<String>,
        outline: Vec<Heading>,
        processing_time: f64,
    ) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            total_headings: outline.len(),
            outline,
            processing_time,
        }
    }

    /// Check the invariants the service promises.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: an empty heading text, a page
    /// below 1, a negative or non-finite processing time, or a
    /// `total_headings` that differs from the outline length.
    pub fn validate(&self) -> Result<()> {
        for (index, heading) in self.outline.iter().enumerate() {
            if heading.text.is_empty() {
                return Err(ModelError::EmptyHeadingText { index });
            }
            if heading.page < 1 {
                return Err(ModelError::InvalidPage {
                    index,
                    page: heading.page,
                });
            }
        }
        if !self.processing_time.is_finite() || self.processing_time < 0.0 {
            return Err(ModelError::InvalidProcessingTime(self.processing_time));
        }
        if self.total_headings != self.outline.len() {
            return Err(ModelError::TotalMismatch {
                reported: self.total_headings,
                actual: self.outline.len(),
            });
        }
        Ok(())
    }

    /// Whether the outline has no headings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}
