use std::path::PathBuf;

/// A local file picked for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Final path component, sent as `filename`.
    pub name: String,
    /// Absolute path on this machine, sent as `original_path`.
    pub original_path: PathBuf,
    pub bytes: Vec<u8>,
    /// Guessed MIME type, if any.
    pub mime_type: Option<String>,
}

impl SelectedFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
