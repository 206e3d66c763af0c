use anyhow::Result;

use crate::clipboard::LocalClipboardContent;

/// The clipboard of the machine the client runs on.
#[async_trait::async_trait]
pub trait SystemClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;

    /// Reads the current content, preferring an image over text.
    async fn read(&self) -> Result<LocalClipboardContent>;
}
