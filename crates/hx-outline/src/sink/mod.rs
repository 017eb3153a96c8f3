//! Export capabilities: saving files and writing the clipboard.
//!
//! The session controller and the formatters never touch the filesystem or
//! the clipboard directly; they hand bytes to an [`ExportSink`]. Tests use
//! [`MemorySink`], the CLI uses [`DirectorySink`].

mod clipboard;
mod directory;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use clipboard::{Clipboard, ClipboardSink, ClipboardTool};
pub use directory::DirectorySink;
pub use memory::{MemorySink, SavedFile};

/// Platform capability for delivering exports.
pub trait ExportSink {
    /// Save `bytes` as a file named `name`.
    fn save_file(&mut self, bytes: &[u8], name: &str) -> Result<(), SinkError>;

    /// Replace the clipboard contents with `text`.
    fn write_clipboard(&mut self, text: &str) -> Result<(), SinkError>;
}

impl<S: ExportSink + ?Sized> ExportSink for &mut S {
    fn save_file(&mut self, bytes: &[u8], name: &str) -> Result<(), SinkError> {
        (**self).save_file(bytes, name)
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), SinkError> {
        (**self).write_clipboard(text)
    }
}

/// Errors from an [`ExportSink`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SinkError {
    /// Filesystem operation failed.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        /// What was being attempted.
        operation: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The export name would escape the target directory.
    #[error("invalid export file name: {0:?}")]
    InvalidName(String),

    /// The sink does not provide this capability.
    #[error("this export target cannot {0}")]
    Unsupported(&'static str),

    /// No clipboard tool is installed.
    #[error("no clipboard tool available; on Linux install wl-copy, xclip or xsel")]
    NoClipboardTool,

    /// A clipboard tool ran but failed.
    #[error("clipboard tool '{tool}' failed: {message}")]
    ClipboardTool {
        /// Tool name.
        tool: String,
        /// Failure description.
        message: String,
    },
}
