//! Errors raised while importing or exporting a document

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single import or export action.
///
/// None of these are fatal: the shell turns them into an [`Alert`] and keeps
/// the current document as it was.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// File contents are not valid UTF-8 text
    #[error("The file is not valid UTF-8 text ({0})")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The chosen file could not be read
    #[error("Could not read {}: {source}", path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The chosen destination could not be written
    #[error("Could not write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// Heading shown above the error message
    pub fn alert_title(&self) -> &'static str {
        match self {
            Self::Decode(_) => "Error reading file",
            Self::Import { .. } => "Error importing file",
            Self::Export { .. } => "Error saving file",
        }
    }
}

/// A message waiting to be acknowledged by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&DocumentError> for Alert {
    fn from(err: &DocumentError) -> Self {
        Self::new(err.alert_title(), err.to_string())
    }
}
