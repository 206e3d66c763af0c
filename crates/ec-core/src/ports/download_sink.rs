use std::path::PathBuf;

use anyhow::Result;

/// Destination for downloaded clipboard payloads.
#[async_trait::async_trait]
pub trait DownloadSinkPort: Send + Sync {
    /// Persist `bytes` under a name derived from `suggested_name` and return
    /// the path actually written. Existing files are never overwritten.
    async fn save(&self, suggested_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}
