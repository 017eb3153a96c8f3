//! Derived views and exports over an extracted outline.
//!
//! Everything in this crate is a pure function of an [`ExtractionResult`]
//! except the [`sink`] implementations, which perform the actual file and
//! clipboard I/O behind the [`ExportSink`] capability.
//!
//! - [`filter`]: the search/level view shown to the user
//! - [`stats`]: per-level counts over the full outline
//! - [`export`]: JSON, indented text and clipboard formats
//! - [`sink`]: where exported bytes end up
//!
//! Filtering only ever affects the interactive view. Exports and clipboard
//! text are always built from the complete outline.
//!
//! [`ExtractionResult`]: hx_model::ExtractionResult

pub mod error;
pub mod export;
pub mod filter;
pub mod sink;
pub mod stats;

pub use error::{ExportError, Result};
pub use export::{
    ExportArtifact, ExportKind, clipboard_text, export_base_name, export_json, export_text,
    json_artifact, json_export_name, outline_line, text_artifact, text_export_name,
};
pub use filter::{filter_outline, matches_heading};
pub use sink::{Clipboard, ClipboardSink, DirectorySink, ExportSink, MemorySink, SinkError};
pub use stats::{OutlineStats, outline_stats};
