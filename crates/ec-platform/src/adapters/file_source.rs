//! Reads files selected for upload.

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use ec_core::ports::FileSourcePort;
use ec_core::{ReadError, SelectedFile};
use tracing::debug;

#[derive(Debug, Default)]
pub struct FsFileSource;

impl FsFileSource {
    pub fn new() -> Self {
        Self
    }
}

/// MIME type guessed from the file extension.
fn guess_mime_type(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
}

fn io_error(path: &Path, err: std::io::Error) -> ReadError {
    match err.kind() {
        ErrorKind::NotFound => ReadError::NotFound(path.to_path_buf()),
        _ => ReadError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
    }
}

#[async_trait]
impl FileSourcePort for FsFileSource {
    async fn read_file(&self, path: &Path) -> Result<SelectedFile, ReadError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| io_error(path, e))?;
        if !metadata.is_file() {
            return Err(ReadError::NotAFile(path.to_path_buf()));
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| io_error(path, e))?;
        let original_path = tokio::fs::canonicalize(path)
            .await
            .unwrap_or_else(|_| path.to_path_buf());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(path = %original_path.display(), bytes = bytes.len(), "read file for upload");
        Ok(SelectedFile {
            name,
            mime_type: guess_mime_type(path),
            original_path,
            bytes,
        })
    }
}
