//! Error types for model validation and parsing.

use thiserror::Error;

/// Errors raised when a model value breaks one of its invariants.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum ModelError {
    /// A heading level string was not one of `H1`, `H2`, `H3`.
    #[error("unknown heading level: {0}")]
    UnknownLevel(String),

    /// A heading with empty text.
    #[error("heading {index} has empty text")]
    EmptyHeadingText {
        /// Position of the heading in the outline.
        index: usize,
    },

    /// A heading with a page number below 1.
    #[error("heading {index} has invalid page number {page}")]
    InvalidPage {
        /// Position of the heading in the outline.
        index: usize,
        /// The offending page number.
        page: u32,
    },

    /// `total_headings` disagrees with the outline length.
    #[error("total_headings is {reported} but the outline has {actual} entries")]
    TotalMismatch {
        /// Count reported by the service.
        reported: usize,
        /// Number of entries actually present.
        actual: usize,
    },

    /// Processing time was negative or not a finite number.
    #[error("invalid processing time: {0}")]
    InvalidProcessingTime(f64),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
