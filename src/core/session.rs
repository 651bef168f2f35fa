//! Editor state independent of the GUI toolkit

use std::path::{Path, PathBuf};

use super::document::Document;
use super::error::{Alert, DocumentError};
use super::file_io::{self, FileDialogs};

const APP_NAME: &str = "Textual";

/// The single live document together with the shell state around it
#[derive(Debug, Default)]
pub struct Session {
    document: Document,
    /// Whether the document changed since it was created, imported or exported
    modified: bool,
    alert: Option<Alert>,
    /// Directory of the last imported or exported file
    last_directory: Option<PathBuf>,
}

impl Session {
    pub fn new(last_directory: Option<PathBuf>) -> Self {
        Self {
            last_directory,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn set_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn last_directory(&self) -> Option<&Path> {
        self.last_directory.as_deref()
    }

    /// Replace the document with an empty one
    pub fn new_document(&mut self) {
        self.document = Document::new();
        self.modified = false;
        tracing::info!("Started new document");
    }

    pub fn set_title(&mut self, title: String) {
        if self.document.title != title {
            self.document.set_title(title);
            self.modified = true;
        }
    }

    pub fn set_body(&mut self, body: String) {
        if self.document.body != body {
            self.document.set_body(body);
            self.modified = true;
        }
    }

    /// Ask for a file and replace the document with its contents.
    ///
    /// Returns `true` if the document was replaced. On failure an alert is
    /// left pending and the current document is kept.
    pub fn import_with(&mut self, dialogs: &mut dyn FileDialogs) -> bool {
        let outcome = self.try_import(dialogs);
        self.finish("import", outcome)
    }

    /// Ask for a destination and write the document there.
    ///
    /// Returns `true` if the file was written. The document itself is never
    /// changed by exporting.
    pub fn export_with(&mut self, dialogs: &mut dyn FileDialogs) -> bool {
        let outcome = self.try_export(dialogs);
        self.finish("export", outcome)
    }

    fn try_import(&mut self, dialogs: &mut dyn FileDialogs) -> Result<Option<PathBuf>, DocumentError> {
        let Some(path) = dialogs.pick_import(self.last_directory.as_deref()) else {
            return Ok(None);
        };

        let document = file_io::import_file(&path)?;
        self.document = document;
        self.modified = false;
        Ok(Some(path))
    }

    fn try_export(&mut self, dialogs: &mut dyn FileDialogs) -> Result<Option<PathBuf>, DocumentError> {
        let file = self.document.to_file();
        let Some(path) = dialogs.pick_export(&file.filename, self.last_directory.as_deref()) else {
            return Ok(None);
        };

        file_io::write_file(&path, &file)?;
        self.modified = false;
        Ok(Some(path))
    }

    fn finish(&mut self, action: &str, outcome: Result<Option<PathBuf>, DocumentError>) -> bool {
        match outcome {
            Ok(Some(path)) => {
                tracing::info!("Finished {}: {}", action, path.display());
                self.last_directory = path.parent().map(Path::to_path_buf);
                true
            }
            Ok(None) => {
                tracing::debug!("Cancelled {}", action);
                false
            }
            Err(e) => {
                tracing::error!("Failed to {}: {}", action, e);
                self.set_alert(Alert::from(&e));
                false
            }
        }
    }

    /// Title for the native window
    pub fn window_title(&self) -> String {
        let mut title = if self.document.title.is_empty() {
            APP_NAME.to_string()
        } else {
            format!("{} - {}", self.document.title, APP_NAME)
        };
        if self.is_modified() {
            title.push('*');
        }
        title
    }
}
