//! The plain-text document being edited

use super::error::DocumentError;

/// A titled plain-text document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Display name, without extension
    pub title: String,
    /// Full text content
    pub body: String,
}

/// Bytes and suggested file name produced by exporting a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with the given title and body
    pub fn from_values(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Decode a document from raw file contents.
    ///
    /// The title is the file name up to its first `.`, ignoring any leading
    /// directories. Without a file name the title is empty.
    pub fn from_file(bytes: Vec<u8>, filename: Option<&str>) -> Result<Self, DocumentError> {
        let title = filename.map(title_from_filename).unwrap_or_default();
        let body = String::from_utf8(bytes)?;
        Ok(Self::from_values(title, body))
    }

    /// Encode the document for writing to disk
    pub fn to_file(&self) -> ExportedFile {
        ExportedFile {
            bytes: self.body.as_bytes().to_vec(),
            filename: self.suggested_filename(),
        }
    }

    /// File name offered in the save dialog
    pub fn suggested_filename(&self) -> String {
        format!("{}.txt", self.title)
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_body(&mut self, body: String) {
        self.body = body;
    }
}

/// `"docs/archive.tar.gz"` becomes `"archive"`
fn title_from_filename(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    name.split('.').next().unwrap_or(name).to_string()
}
