use std::path::Path;

use crate::clipboard::SelectedFile;
use crate::errors::ReadError;

/// Reads a local file the user picked for upload.
#[async_trait::async_trait]
pub trait FileSourcePort: Send + Sync {
    async fn read_file(&self, path: &Path) -> Result<SelectedFile, ReadError>;
}
