//! Documents accepted for upload.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions the parsing service accepts, with their MIME types.
pub const ACCEPTED_EXTENSIONS: [(&str, &str); 4] = [
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("txt", "text/plain"),
];

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file type '{0}'. Allowed: .pdf, .doc, .docx, .txt")]
    Unsupported(String),

    #[error("Document is empty: {0}")]
    Empty(String),

    #[error("Failed to read document {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A document validated locally before any request is made.
#[derive(Debug, Clone)]
pub struct Document {
    file_name: String,
    mime_type: &'static str,
    bytes: Vec<u8>,
}

impl Document {
    /// Read and validate a document from disk.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        // Reject by extension before touching the file.
        mime_for(&file_name)?;
        let bytes = std::fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&file_name, bytes)
    }

    /// Validate an in-memory document.
    pub fn from_bytes(file_name: &str, bytes: Vec<u8>) -> Result<Self, DocumentError> {
        let mime_type = mime_for(file_name)?;
        if bytes.is_empty() {
            return Err(DocumentError::Empty(file_name.to_string()));
        }
        Ok(Self {
            file_name: file_name.to_string(),
            mime_type,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn mime_for(file_name: &str) -> Result<&'static str, DocumentError> {
    let extension = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    ACCEPTED_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .ok_or_else(|| DocumentError::Unsupported(file_name.to_string()))
}
