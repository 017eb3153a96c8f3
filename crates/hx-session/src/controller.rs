//! Session state controller.

use hx_client::{ExtractionClient, ExtractionError, FALLBACK_MESSAGE};
use hx_model::{DocumentFile, ExtractionResult, Heading, HeadingLevel};
use hx_outline::{
    ExportSink, OutlineStats, clipboard_text, filter_outline, json_artifact, outline_stats,
    text_artifact,
};

use crate::error::{INVALID_FILE_MESSAGE, Result, SessionError};
use crate::session::{Session, SessionStatus};

/// The file handed out by [`SessionController::submit`] for upload.
#[derive(Debug, Clone)]
pub struct UploadTicket {
    file: DocumentFile,
}

impl UploadTicket {
    /// File to send to the extraction service.
    #[must_use]
    pub fn file(&self) -> &DocumentFile {
        &self.file
    }
}

/// Sole owner of a [`Session`]; every state change goes through here.
#[derive(Debug, Default)]
pub struct SessionController {
    session: Session,
}

impl SessionController {
    /// Controller over a fresh idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    // =========================================================================
    // UPLOAD STATE MACHINE
    // =========================================================================

    /// Select a document for upload.
    ///
    /// Anything other than `application/pdf` moves the session to
    /// [`SessionStatus::Error`] with [`INVALID_FILE_MESSAGE`], drops any
    /// selected file and keeps a previous result. A PDF moves it to
    /// [`SessionStatus::FileSelected`] and clears the error.
    ///
    /// # Errors
    ///
    /// [`SessionError::Validation`] for a non-PDF file, and
    /// [`SessionError::InvalidTransition`] while an upload is in flight.
    pub fn select_file(&mut self, file: DocumentFile) -> Result<()> {
        self.ensure_not_uploading("select a file")?;

        if !file.is_pdf() {
            tracing::warn!(
                file = file.name(),
                media_type = file.media_type(),
                "Rejected non-PDF selection"
            );
            self.session.status = SessionStatus::Error;
            self.session.selected_file = None;
            self.session.error_message = Some(INVALID_FILE_MESSAGE.to_string());
            return Err(SessionError::Validation {
                message: INVALID_FILE_MESSAGE.to_string(),
            });
        }

        tracing::info!(file = file.name(), bytes = file.len(), "File selected");
        self.session.status = SessionStatus::FileSelected;
        self.session.selected_file = Some(file);
        self.session.error_message = None;
        Ok(())
    }

    /// Start an upload of the selected file.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidTransition`] unless the session is in
    /// [`SessionStatus::FileSelected`]. In particular a second submit while
    /// uploading is rejected.
    pub fn submit(&mut self) -> Result<UploadTicket> {
        let file = match (&self.session.status, &self.session.selected_file) {
            (SessionStatus::FileSelected, Some(file)) => file.clone(),
            (status, _) => {
                tracing::warn!(%status, "Rejected submit");
                return Err(SessionError::InvalidTransition {
                    operation: "submit",
                    status: *status,
                });
            }
        };

        tracing::info!(file = file.name(), "Uploading");
        self.session.status = SessionStatus::Uploading;
        Ok(UploadTicket { file })
    }

    /// Record a successful extraction.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidTransition`] unless an upload is in flight;
    /// the session is left untouched in that case.
    pub fn on_extraction_success(&mut self, result: ExtractionResult) -> Result<()> {
        self.ensure_uploading("complete an upload")?;

        tracing::info!(
            filename = %result.filename,
            headings = result.total_headings,
            "Extraction succeeded"
        );
        self.session.status = SessionStatus::Success;
        self.session.selected_file = None;
        self.session.error_message = None;
        self.session.result = Some(result);
        Ok(())
    }

    /// Record a failed extraction.
    ///
    /// `None` stores [`FALLBACK_MESSAGE`].
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidTransition`] unless an upload is in flight;
    /// the session is left untouched in that case.
    pub fn on_extraction_failure(&mut self, message: Option<String>) -> Result<()> {
        self.ensure_uploading("fail an upload")?;

        let message = message.unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        tracing::warn!(%message, "Extraction failed");
        self.session.status = SessionStatus::Error;
        self.session.selected_file = None;
        self.session.result = None;
        self.session.error_message = Some(message);
        Ok(())
    }

    /// Record a failed extraction from a client error.
    ///
    /// # Errors
    ///
    /// Same as [`on_extraction_failure`](Self::on_extraction_failure).
    pub fn on_extraction_error(&mut self, err: &ExtractionError) -> Result<()> {
        tracing::debug!("Extraction error detail: {}", err);
        self.on_extraction_failure(err.detail().map(str::to_string))
    }

    /// Submit the selected file with `client` and record the outcome.
    ///
    /// An extraction failure is not an error here: it leaves the session in
    /// [`SessionStatus::Error`] and the returned status says so.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidTransition`] if no file is ready to submit.
    pub async fn upload<C: ExtractionClient>(&mut self, client: &C) -> Result<SessionStatus> {
        let ticket = self.submit()?;
        match client.extract(ticket.file()).await {
            Ok(result) => self.on_extraction_success(result)?,
            Err(err) => self.on_extraction_error(&err)?,
        }
        Ok(self.session.status)
    }

    /// Return to a fresh idle session.
    ///
    /// Clears the file, result, error and search query and re-enables every
    /// level. The statistics visibility preference is kept.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidTransition`] while an upload is in flight.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_not_uploading("reset")?;

        tracing::info!(from = %self.session.status, "Session reset");
        self.session = Session {
            show_stats: self.session.show_stats,
            ..Session::default()
        };
        Ok(())
    }

    // =========================================================================
    // VIEW CONTROLS
    // =========================================================================

    /// Toggle a level in the active set. Returns whether it is now active.
    pub fn toggle_level(&mut self, level: HeadingLevel) -> bool {
        let active = self.session.active_levels.toggle(level);
        tracing::debug!(%level, active, "Level toggled");
        active
    }

    /// Replace the search query verbatim.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.session.search_query = query.into();
    }

    /// Show or hide the statistics panel.
    pub fn set_show_stats(&mut self, show: bool) {
        self.session.show_stats = show;
    }

    /// Flip statistics visibility. Returns the new value.
    pub fn toggle_stats(&mut self) -> bool {
        self.session.show_stats = !self.session.show_stats;
        self.session.show_stats
    }

    // =========================================================================
    // DERIVED VIEWS
    // =========================================================================

    /// Headings matching the current query and levels, in document order.
    ///
    /// Empty when there is no result.
    #[must_use]
    pub fn filtered_outline(&self) -> Vec<&Heading> {
        match &self.session.result {
            Some(result) => filter_outline(
                &result.outline,
                &self.session.search_query,
                self.session.active_levels,
            ),
            None => Vec::new(),
        }
    }

    /// Per-level counts over the full outline, independent of any filter.
    #[must_use]
    pub fn stats(&self) -> Option<OutlineStats> {
        self.session
            .result
            .as_ref()
            .map(|result| outline_stats(&result.outline, result.total_headings))
    }

    // =========================================================================
    // EXPORTS
    // =========================================================================

    /// Save the complete result as JSON. Returns the file name used.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoResult`] without a result, or the formatter/sink
    /// failure.
    pub fn export_json<S: ExportSink + ?Sized>(&self, sink: &mut S) -> Result<String> {
        let artifact = json_artifact(self.require_result()?)?;
        sink.save_file(&artifact.bytes, &artifact.name)?;
        tracing::info!(name = %artifact.name, kind = %artifact.kind, "Exported");
        Ok(artifact.name)
    }

    /// Save the complete outline as indented text. Returns the file name used.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoResult`] without a result, or the sink failure.
    pub fn export_text<S: ExportSink + ?Sized>(&self, sink: &mut S) -> Result<String> {
        let artifact = text_artifact(self.require_result()?);
        sink.save_file(&artifact.bytes, &artifact.name)?;
        tracing::info!(name = %artifact.name, kind = %artifact.kind, "Exported");
        Ok(artifact.name)
    }

    /// Copy the complete outline to the clipboard, ignoring active filters.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoResult`] without a result, or the sink failure.
    pub fn copy_outline<S: ExportSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let result = self.require_result()?;
        sink.write_clipboard(&clipboard_text(&result.outline))?;
        tracing::info!(headings = result.outline.len(), "Outline copied to clipboard");
        Ok(())
    }

    fn require_result(&self) -> Result<&ExtractionResult> {
        self.session.result.as_ref().ok_or(SessionError::NoResult)
    }

    fn ensure_uploading(&self, operation: &'static str) -> Result<()> {
        if self.session.status == SessionStatus::Uploading {
            Ok(())
        } else {
            tracing::warn!(status = %self.session.status, operation, "Rejected transition");
            Err(SessionError::InvalidTransition {
                operation,
                status: self.session.status,
            })
        }
    }

    fn ensure_not_uploading(&self, operation: &'static str) -> Result<()> {
        if self.session.status == SessionStatus::Uploading {
            tracing::warn!(operation, "Rejected transition while uploading");
            Err(SessionError::InvalidTransition {
                operation,
                status: SessionStatus::Uploading,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_model::PDF_MEDIA_TYPE;

    fn pdf() -> DocumentFile {
        DocumentFile::new("paper.pdf", PDF_MEDIA_TYPE, b"%PDF".to_vec())
    }

    fn result() -> ExtractionResult {
        ExtractionResult::new(
            "paper.pdf",
            "Paper",
            vec![
                Heading::new(HeadingLevel::H1, "Introduction", 1),
                Heading::new(HeadingLevel::H2, "Background", 2),
            ],
            0.2,
        )
    }

    fn succeeded() -> SessionController {
        let mut controller = SessionController::new();
        controller.select_file(pdf()).unwrap();
        controller.submit().unwrap();
        controller.on_extraction_success(result()).unwrap();
        controller
    }

    #[test]
    fn test_select_pdf() {
        let mut controller = SessionController::new();
        controller.select_file(pdf()).unwrap();
        assert_eq!(controller.session().status(), SessionStatus::FileSelected);
        assert_eq!(controller.session().selected_file(), Some(&pdf()));
    }

    #[test]
    fn test_select_non_pdf() {
        let mut controller = SessionController::new();
        let err = controller
            .select_file(DocumentFile::new("a.png", "image/png", b"png".to_vec()))
            .unwrap_err();
        assert!(matches!(err, SessionError::Validation { .. }));
        assert_eq!(err.to_string(), "Please select a PDF file");
        assert_eq!(controller.session().status(), SessionStatus::Error);
        assert_eq!(
            controller.session().error_message(),
            Some("Please select a PDF file")
        );
        assert!(controller.session().selected_file().is_none());
    }

    #[test]
    fn test_valid_selection_clears_error() {
        let mut controller = SessionController::new();
        let _ = controller.select_file(DocumentFile::new("a.txt", "text/plain", b"x".to_vec()));
        controller.select_file(pdf()).unwrap();
        assert!(controller.session().error_message().is_none());
    }

    #[test]
    fn test_submit_requires_file_selected() {
        let mut controller = SessionController::new();
        assert!(matches!(
            controller.submit(),
            Err(SessionError::InvalidTransition {
                operation: "submit",
                status: SessionStatus::Idle
            })
        ));
    }

    #[test]
    fn test_success_clears_file() {
        let controller = succeeded();
        let session = controller.session();
        assert_eq!(session.status(), SessionStatus::Success);
        assert!(session.selected_file().is_none());
        assert_eq!(session.result(), Some(&result()));
    }

    #[test]
    fn test_failure_uses_fallback() {
        let mut controller = SessionController::new();
        controller.select_file(pdf()).unwrap();
        controller.submit().unwrap();
        controller.on_extraction_failure(None).unwrap();
        assert_eq!(controller.session().status(), SessionStatus::Error);
        assert_eq!(
            controller.session().error_message(),
            Some("Failed to process PDF")
        );
        assert!(controller.session().result().is_none());
    }

    #[test]
    fn test_completion_outside_upload_is_rejected() {
        let mut controller = succeeded();
        assert!(controller.on_extraction_failure(Some("late".into())).is_err());
        assert_eq!(controller.session().status(), SessionStatus::Success);
        assert!(controller.session().result().is_some());
    }

    #[test]
    fn test_toggle_stats() {
        let mut controller = SessionController::new();
        assert!(controller.toggle_stats());
        assert!(!controller.toggle_stats());
    }

    #[test]
    fn test_no_result_views() {
        let controller = SessionController::new();
        assert!(controller.filtered_outline().is_empty());
        assert!(controller.stats().is_none());
    }
}
