use super::{ExportSink, SinkError};

/// A file recorded by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    /// File name passed to `save_file`.
    pub name: String,
    /// Bytes passed to `save_file`.
    pub bytes: Vec<u8>,
}

/// In-memory sink that records every save and clipboard write.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Files saved, in call order.
    pub files: Vec<SavedFile>,
    /// Clipboard writes, in call order.
    pub clipboard: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently saved file with the given name.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&SavedFile> {
        self.files.iter().rev().find(|file| file.name == name)
    }

    /// Latest clipboard contents.
    #[must_use]
    pub fn clipboard_contents(&self) -> Option<&str> {
        self.clipboard.last().map(String::as_str)
    }
}

impl ExportSink for MemorySink {
    fn save_file(&mut self, bytes: &[u8], name: &str) -> Result<(), SinkError> {
        self.files.push(SavedFile {
            name: name.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), SinkError> {
        self.clipboard.push(text.to_string());
        Ok(())
    }
}
