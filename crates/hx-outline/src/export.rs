//! Export formatters.
//!
//! All formats are built from the complete, unfiltered outline. The current
//! search query and level selection only shape the interactive view.
//!
//! # Text layout
//!
//! ```text
//! Annual Report
//! =============
//!
//! Introduction (Page 1)
//!   Background (Page 2)
//!     Scope (Page 2)
//! ```
//!
//! Each heading is indented by two spaces per level below `H1`. The
//! clipboard format is the same heading lines without the title block.

use std::fmt;

use hx_model::{ExtractionResult, Heading};

use crate::error::Result;

/// Suffix of the JSON export file name.
pub const JSON_EXPORT_SUFFIX: &str = "_headings.json";

/// Suffix of the text export file name.
pub const TEXT_EXPORT_SUFFIX: &str = "_outline.txt";

const INDENT: &str = "  ";

/// Kind of downloadable export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// Full result as pretty-printed JSON.
    Json,
    /// Indented plain-text outline.
    Text,
}

impl ExportKind {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Text => "Text outline",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named, ready-to-save export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// What was exported.
    pub kind: ExportKind,
    /// Target file name.
    pub name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Serialize the complete result as JSON with two-space indentation.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`](crate::ExportError::Serialize) if
/// serialization fails.
pub fn export_json(result: &ExtractionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render the title block followed by every heading line.
#[must_use]
pub fn export_text(result: &ExtractionResult) -> String {
    let underline = "=".repeat(result.title.chars().count());
    let mut lines = Vec::with_capacity(result.outline.len() + 3);
    lines.push(result.title.clone());
    lines.push(underline);
    lines.push(String::new());
    lines.extend(result.outline.iter().map(outline_line));
    lines.join("\n")
}

/// Render the heading lines only, for the clipboard.
#[must_use]
pub fn clipboard_text(outline: &[Heading]) -> String {
    outline
        .iter()
        .map(outline_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<indent><text> (Page <page>)` for a single heading.
#[must_use]
pub fn outline_line(heading: &Heading) -> String {
    format!(
        "{}{} (Page {})",
        INDENT.repeat(heading.level.depth()),
        heading.text,
        heading.page
    )
}

/// Base name for export files: the last path segment of `filename` with a
/// trailing `.pdf` removed (ASCII case-insensitive).
#[must_use]
pub fn export_base_name(filename: &str) -> &str {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    let split = name.len().saturating_sub(4);
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(".pdf") => stem,
        _ => name,
    }
}

/// File name for the JSON export.
#[must_use]
pub fn json_export_name(filename: &str) -> String {
    format!("{}{JSON_EXPORT_SUFFIX}", export_base_name(filename))
}

/// File name for the text export.
#[must_use]
pub fn text_export_name(filename: &str) -> String {
    format!("{}{TEXT_EXPORT_SUFFIX}", export_base_name(filename))
}

/// Build the JSON export artifact.
///
/// # Errors
///
/// Propagates serialization failures from [`export_json`].
pub fn json_artifact(result: &ExtractionResult) -> Result<ExportArtifact> {
    Ok(ExportArtifact {
        kind: ExportKind::Json,
        name: json_export_name(&result.filename),
        bytes: export_json(result)?.into_bytes(),
    })
}

/// Build the text export artifact.
#[must_use]
pub fn text_artifact(result: &ExtractionResult) -> ExportArtifact {
    ExportArtifact {
        kind: ExportKind::Text,
        name: text_export_name(&result.filename),
        bytes: export_text(result).into_bytes(),
    }
}
