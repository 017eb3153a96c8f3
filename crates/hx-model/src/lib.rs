//! Data model for document outlines returned by the heading-extraction service.
//!
//! This crate provides the value types shared by every other crate in the
//! workspace:
//!
//! - [`heading`]: heading levels and individual outline entries
//! - [`result`]: the complete extraction result for one document
//! - [`level_set`]: a small copyable set of heading levels used for filtering
//! - [`document`]: the binary document handle selected for upload
//!
//! The outline is flat: each [`Heading`] carries its level as a tag and the
//! entries are kept in document order. There is no parent/child nesting.

pub mod document;
pub mod error;
pub mod heading;
pub mod level_set;
pub mod result;

pub use document::{DocumentFile, OCTET_STREAM_MEDIA_TYPE, PDF_MEDIA_TYPE, media_type_for_name};
pub use error::{ModelError, Result};
pub use heading::{Heading, HeadingLevel};
pub use level_set::LevelSet;
pub use result::ExtractionResult;
