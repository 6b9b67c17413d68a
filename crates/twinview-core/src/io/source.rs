use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::error::PickerError;

/// Readable stream handed from a file source to the decoder.
pub type ImageStream = Box<dyn Read + Send>;

/// An opened file, ready to decode.
pub struct OpenedFile {
    pub reader: ImageStream,
    /// Display name (usually the file name).
    pub label: String,
}

/// Chooses and opens one image file.
///
/// `open` may block for as long as it likes (a native dialog waits on the
/// user); the load pipeline always calls it from a background thread.
pub trait FileSource: Send {
    fn open(&mut self, extensions: &[String]) -> Result<OpenedFile, PickerError>;
}

/// Opens a path known up front, e.g. one given on the command line.
#[derive(Clone, Debug)]
pub struct PathSource {
    path: PathBuf,
}

impl PathSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileSource for PathSource {
    fn open(&mut self, extensions: &[String]) -> Result<OpenedFile, PickerError> {
        if !has_allowed_extension(&self.path, extensions) {
            return Err(PickerError::Failed(format!(
                "{}: extension not in {:?}",
                self.path.display(),
                extensions
            )));
        }
        let file = File::open(&self.path)
            .map_err(|e| PickerError::Failed(format!("{}: {e}", self.path.display())))?;
        Ok(OpenedFile {
            reader: Box::new(BufReader::new(file)),
            label: display_name(&self.path),
        })
    }
}

/// Serves bytes already in memory. Extensions are not checked.
#[derive(Clone, Debug)]
pub struct MemorySource {
    bytes: Vec<u8>,
    label: String,
}

impl MemorySource {
    pub fn new(bytes: Vec<u8>, label: impl Into<String>) -> Self {
        Self {
            bytes,
            label: label.into(),
        }
    }
}

impl FileSource for MemorySource {
    fn open(&mut self, _extensions: &[String]) -> Result<OpenedFile, PickerError> {
        Ok(OpenedFile {
            reader: Box::new(Cursor::new(std::mem::take(&mut self.bytes))),
            label: self.label.clone(),
        })
    }
}

/// Case-insensitive extension check. An empty list allows everything.
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// File name for logs and labels, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["jpg".into(), "png".into()]
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert!(has_allowed_extension(Path::new("a/b/photo.PNG"), &exts()));
        assert!(has_allowed_extension(Path::new("photo.jpg"), &exts()));
    }

    #[test]
    fn test_extension_rejected() {
        assert!(!has_allowed_extension(Path::new("notes.txt"), &exts()));
        assert!(!has_allowed_extension(Path::new("no_extension"), &exts()));
    }

    #[test]
    fn test_empty_extension_list_allows_all() {
        assert!(has_allowed_extension(Path::new("notes.txt"), &[]));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/x/cat.gif")), "cat.gif");
    }
}
