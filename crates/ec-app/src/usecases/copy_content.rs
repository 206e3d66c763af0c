use std::sync::Arc;

use ec_core::ports::{ClipboardServicePort, SystemClipboardPort};
use ec_core::{ClipboardSnapshot, ContentKind};
use tracing::{info, info_span, warn, Instrument};

use crate::errors::ActionError;

/// Put the current content on the local system clipboard.
///
/// Text snapshots copy their text; image snapshots copy the image URL.
pub struct CopyContent {
    service: Arc<dyn ClipboardServicePort>,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CopyContent {
    pub fn new(
        service: Arc<dyn ClipboardServicePort>,
        clipboard: Arc<dyn SystemClipboardPort>,
    ) -> Self {
        Self { service, clipboard }
    }

    /// Returns the text that was copied.
    pub async fn execute(&self, snapshot: Option<&ClipboardSnapshot>) -> Result<String, ActionError> {
        let span = info_span!("usecase.copy_content.execute");

        async {
            let text = match snapshot.map(|s| (&s.kind, s)) {
                Some((ContentKind::Text, snapshot)) => snapshot.text().to_string(),
                Some((ContentKind::Image, _)) => self.service.image_url(),
                _ => return Err(ActionError::NoContent("copy")),
            };

            self.clipboard.write_text(&text).await.map_err(|e| {
                warn!(error = %e, "system clipboard write failed");
                ActionError::Clipboard(e.to_string())
            })?;

            info!(chars = text.chars().count(), "copied to system clipboard");
            Ok(text)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{snapshot, MockClipboard, MockService, IMAGE_URL};
    use ec_core::Metadata;

    fn service_with_image_url() -> MockService {
        let mut service = MockService::new();
        service
            .expect_image_url()
            .returning(|| IMAGE_URL.to_string());
        service
    }

    #[tokio::test]
    async fn copies_raw_text() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text == "hello")
            .times(1)
            .returning(|_| Ok(()));
        let uc = CopyContent::new(Arc::new(service_with_image_url()), Arc::new(clipboard));

        let snap = snapshot(ContentKind::Text, Some("hello"), Metadata::new());
        assert_eq!(uc.execute(Some(&snap)).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn copies_image_url_for_images() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text == IMAGE_URL)
            .times(1)
            .returning(|_| Ok(()));
        let uc = CopyContent::new(Arc::new(service_with_image_url()), Arc::new(clipboard));

        let snap = snapshot(ContentKind::Image, None, Metadata::new());
        assert_eq!(uc.execute(Some(&snap)).await.unwrap(), IMAGE_URL);
    }

    #[tokio::test]
    async fn nothing_to_copy_for_files_or_empty() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().never();
        let uc = CopyContent::new(Arc::new(service_with_image_url()), Arc::new(clipboard));

        let snap = snapshot(ContentKind::File, None, Metadata::new());
        assert_eq!(
            uc.execute(Some(&snap)).await,
            Err(ActionError::NoContent("copy"))
        );
        assert_eq!(uc.execute(None).await, Err(ActionError::NoContent("copy")));
    }

    #[tokio::test]
    async fn clipboard_failure_is_reported() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(anyhow::anyhow!("no display")));
        let uc = CopyContent::new(Arc::new(service_with_image_url()), Arc::new(clipboard));

        let snap = snapshot(ContentKind::Text, Some("x"), Metadata::new());
        assert_eq!(
            uc.execute(Some(&snap)).await,
            Err(ActionError::Clipboard("no display".into()))
        );
    }
}
