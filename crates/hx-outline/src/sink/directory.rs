use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Clipboard, ExportSink, SinkError};

/// Sink that writes exports into a directory and copies via the system
/// clipboard.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    clipboard: Clipboard,
}

impl DirectorySink {
    /// Write into `dir` (created on first save) using platform clipboard tools.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_clipboard(dir, Clipboard::new())
    }

    /// Write into `dir` with a specific clipboard.
    pub fn with_clipboard(dir: impl Into<PathBuf>, clipboard: Clipboard) -> Self {
        Self {
            dir: dir.into(),
            clipboard,
        }
    }

    /// Target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a file named `name` would be written to.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::InvalidName`] for names that are empty or contain
    /// path separators or parent references.
    pub fn target_path(&self, name: &str) -> Result<PathBuf, SinkError> {
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\']);
        if invalid {
            return Err(SinkError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(name))
    }
}

impl ExportSink for DirectorySink {
    fn save_file(&mut self, bytes: &[u8], name: &str) -> Result<(), SinkError> {
        let path = self.target_path(name)?;

        fs::create_dir_all(&self.dir).map_err(|e| SinkError::Io {
            operation: "create directory",
            path: self.dir.clone(),
            source: e,
        })?;

        // Write to a sibling temp file, then rename over the target.
        let temp_path = self.dir.join(format!(".{name}.tmp"));

        let mut file = File::create(&temp_path).map_err(|e| SinkError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(bytes).map_err(|e| SinkError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;

        file.sync_all().map_err(|e| SinkError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| SinkError::Io {
            operation: "rename",
            path: path.clone(),
            source: e,
        })?;

        tracing::info!("Saved export to {}", path.display());
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), SinkError> {
        self.clipboard.copy_text(text)
    }
}
