//! Session data.

use std::fmt;

use hx_model::{DocumentFile, ExtractionResult, LevelSet};

/// Upload status of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Nothing selected yet.
    #[default]
    Idle,
    /// A PDF is selected and ready to submit.
    FileSelected,
    /// The document is with the extraction service.
    Uploading,
    /// The last upload produced a result.
    Success,
    /// The last selection or upload failed.
    Error,
}

impl SessionStatus {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FileSelected => "file selected",
            Self::Uploading => "uploading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of one user interaction cycle.
///
/// Read-only from the outside; see
/// [`SessionController`](crate::SessionController) for the operations that
/// change it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) status: SessionStatus,
    pub(crate) selected_file: Option<DocumentFile>,
    pub(crate) result: Option<ExtractionResult>,
    pub(crate) error_message: Option<String>,
    pub(crate) search_query: String,
    pub(crate) active_levels: LevelSet,
    pub(crate) show_stats: bool,
}

impl Session {
    /// A fresh idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current upload status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// File awaiting or undergoing upload.
    #[must_use]
    pub fn selected_file(&self) -> Option<&DocumentFile> {
        self.selected_file.as_ref()
    }

    /// Stored extraction result.
    #[must_use]
    pub fn result(&self) -> Option<&ExtractionResult> {
        self.result.as_ref()
    }

    /// Message describing the last failure.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Search text, exactly as entered.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Levels currently shown.
    #[must_use]
    pub fn active_levels(&self) -> LevelSet {
        self.active_levels
    }

    /// Whether the statistics panel is visible.
    #[must_use]
    pub fn show_stats(&self) -> bool {
        self.show_stats
    }

    /// Whether an upload is in flight.
    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.status == SessionStatus::Uploading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.selected_file().is_none());
        assert!(session.result().is_none());
        assert!(session.error_message().is_none());
        assert_eq!(session.search_query(), "");
        assert!(session.active_levels().is_all());
        assert!(!session.show_stats());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SessionStatus::FileSelected.to_string(), "file selected");
        assert_eq!(SessionStatus::Uploading.label(), "uploading");
    }
}
