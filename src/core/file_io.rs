//! Whole-file reads and writes, and the platform file pickers

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use super::document::{Document, ExportedFile};
use super::error::DocumentError;

/// Extensions offered by the plain-text filter
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "markdown", "log"];

/// Read the full contents of a file
pub fn read_file(path: &Path) -> Result<Vec<u8>, DocumentError> {
    fs::read(path).map_err(|source| DocumentError::Import {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a file and decode it as a document titled after the file name
pub fn import_file(path: &Path) -> Result<Document, DocumentError> {
    let bytes = read_file(path)?;
    let filename = path.file_name().map(|name| name.to_string_lossy());
    Document::from_file(bytes, filename.as_deref())
}

/// Write an exported document to `path`.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`, so the destination is either fully replaced or
/// left untouched. An existing destination keeps its permissions, and a
/// symlinked destination is written through to its target.
pub fn write_file(path: &Path, file: &ExportedFile) -> Result<(), DocumentError> {
    write_atomic(path, &file.bytes).map_err(|source| DocumentError::Export {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let target = resolve_symlink(path)?;
    let dir = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());

    let mut tmp = temp_file_in(dir)?;
    tmp.write_all(bytes)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(())
}

fn resolve_symlink(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

/// New files get the same mode as `fs::write` would give them (0666 less umask)
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

/// Platform open/save pickers. `None` means the user cancelled.
pub trait FileDialogs {
    /// Ask for a text file to import
    fn pick_import(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Ask where to save, proposing `default_name`
    fn pick_export(&mut self, default_name: &str, start_dir: Option<&Path>) -> Option<PathBuf>;
}

/// Native dialogs provided by the operating system
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl NativeDialogs {
    fn dialog(start_dir: Option<&Path>) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new().add_filter("Plain text", TEXT_EXTENSIONS);
        match start_dir {
            Some(dir) if dir.is_dir() => dialog.set_directory(dir),
            _ => dialog,
        }
    }
}

impl FileDialogs for NativeDialogs {
    fn pick_import(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        Self::dialog(start_dir)
            .set_title("Import text file")
            .pick_file()
    }

    fn pick_export(&mut self, default_name: &str, start_dir: Option<&Path>) -> Option<PathBuf> {
        Self::dialog(start_dir)
            .set_title("Export text file")
            .set_file_name(default_name)
            .save_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.md");
        fs::write(&path, "line1\nline2").unwrap();

        let doc = import_file(&path).unwrap();
        assert_eq!(doc, Document::from_values("draft", "line1\nline2"));
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = import_file(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(DocumentError::Import { .. })));
    }

    #[test]
    fn test_import_binary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.txt");
        fs::write(&path, [0x89, b'P', b'N', b'G', 0xff, 0xfe]).unwrap();

        let result = import_file(&path);
        assert!(matches!(result, Err(DocumentError::Decode(_))));
    }

    #[test]
    fn test_write_file_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Notes.txt");
        fs::write(&path, "old contents that are longer").unwrap();

        let file = Document::from_values("Notes", "hello world").to_file();
        write_file(&path, &file).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"hello world");
        // only the destination remains, no leftover temporary file
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Notes.txt");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let file = Document::from_values("Notes", "new").to_file();
        write_file(&path, &file).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_new_file_mode_matches_fs_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.txt");
        fs::write(&reference, "").unwrap();

        let path = dir.path().join("Fresh.txt");
        let file = Document::from_values("Fresh", "body").to_file();
        write_file(&path, &file).unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_through_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.txt");
        let link = dir.path().join("link.txt");
        fs::write(&target, "old").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let file = Document::from_values("link", "through").to_file();
        write_file(&link, &file).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(&target).unwrap(), b"through");
    }

    #[test]
    fn test_text_filter_is_plain_text_only() {
        assert!(TEXT_EXTENSIONS.contains(&"txt"));
        assert!(TEXT_EXTENSIONS.iter().all(|ext| *ext != "*" && !ext.is_empty()));
    }

    #[test]
    fn test_write_file_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("Notes.txt");

        let file = Document::from_values("Notes", "hello").to_file();
        let result = write_file(&path, &file);
        assert!(matches!(result, Err(DocumentError::Export { .. })));
        assert!(!path.exists());
    }
}
