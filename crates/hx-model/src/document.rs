//! Document selected for upload.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Media type accepted by the extraction service.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media type used when nothing more specific is known.
pub const OCTET_STREAM_MEDIA_TYPE: &str = "application/octet-stream";

/// An opaque binary document plus the metadata needed to upload it.
///
/// Cloning is cheap; the bytes are shared.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentFile {
    name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl DocumentFile {
    /// Wrap bytes with an explicit name and media type.
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, inferring the media type from its extension.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = media_type_for_name(&name);
        Ok(Self::new(name, media_type, bytes))
    }

    /// File name without directories.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// File contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the declared media type is `application/pdf`.
    ///
    /// Parameters after `;` are ignored and the comparison is ASCII
    /// case-insensitive.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        let essence = self.media_type.split(';').next().unwrap_or_default().trim();
        essence.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
    }
}

impl fmt::Debug for DocumentFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Media type for a file name, based on its extension only.
#[must_use]
pub fn media_type_for_name(name: &str) -> &'static str {
    let is_pdf = Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        PDF_MEDIA_TYPE
    } else {
        OCTET_STREAM_MEDIA_TYPE
    }
}
