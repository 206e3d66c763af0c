use std::sync::Arc;

use ec_core::ports::{ClipboardServicePort, SystemClipboardPort};
use ec_core::{LocalClipboardContent, UploadReceipt, UploadRequest};
use tracing::{info, info_span, warn, Instrument};

use crate::errors::ActionError;

/// Replace the remote clipboard with whatever the local clipboard holds.
///
/// An image wins over text. Images travel as PNG.
pub struct UploadClipboard {
    service: Arc<dyn ClipboardServicePort>,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl UploadClipboard {
    pub fn new(
        service: Arc<dyn ClipboardServicePort>,
        clipboard: Arc<dyn SystemClipboardPort>,
    ) -> Self {
        Self { service, clipboard }
    }

    pub async fn execute(&self) -> Result<UploadReceipt, ActionError> {
        let span = info_span!("usecase.upload_clipboard.execute");

        async {
            let content = self.clipboard.read().await.map_err(|e| {
                warn!(error = %e, "system clipboard read failed");
                ActionError::Clipboard(format!("{e:#}"))
            })?;

            let request = match &content {
                LocalClipboardContent::Empty => return Err(ActionError::ClipboardEmpty),
                // Whitespace is real clipboard content; only nothing at all is empty.
                LocalClipboardContent::Text(text) => UploadRequest::text(text),
                LocalClipboardContent::Image(image) => UploadRequest::image(image),
            };

            let kind = request.kind.clone();
            let receipt = self.service.upload(request).await?;
            info!(%kind, "local clipboard uploaded");
            Ok(receipt)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{MockClipboard, MockService};
    use ec_core::clipboard::meta_keys;
    use ec_core::{ContentKind, PngImage};

    #[tokio::test]
    async fn uploads_text_from_clipboard() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_read()
            .returning(|| Ok(LocalClipboardContent::Text("from clipboard".into())));
        let mut service = MockService::new();
        service
            .expect_upload()
            .withf(|req| req.kind == ContentKind::Text && req.content == "from clipboard")
            .times(1)
            .returning(|_| Ok(UploadReceipt::default()));

        let uc = UploadClipboard::new(Arc::new(service), Arc::new(clipboard));
        assert!(uc.execute().await.is_ok());
    }

    #[tokio::test]
    async fn uploads_image_as_png_with_dimensions() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_read().returning(|| {
            Ok(LocalClipboardContent::Image(PngImage {
                png: vec![1, 2, 3],
                width: 10,
                height: 20,
            }))
        });
        let mut service = MockService::new();
        service
            .expect_upload()
            .withf(|req| {
                req.kind == ContentKind::Image
                    && req.metadata.get_str(meta_keys::FORMAT) == Some("PNG")
                    && req.metadata.get_str(meta_keys::DIMENSIONS) == Some("10x20")
                    && req.metadata.get_u64(meta_keys::SIZE) == Some(3)
            })
            .times(1)
            .returning(|_| Ok(UploadReceipt::default()));

        let uc = UploadClipboard::new(Arc::new(service), Arc::new(clipboard));
        assert!(uc.execute().await.is_ok());
    }

    #[tokio::test]
    async fn empty_clipboard_sends_nothing() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_read()
            .returning(|| Ok(LocalClipboardContent::Empty));
        let mut service = MockService::new();
        service.expect_upload().never();

        let uc = UploadClipboard::new(Arc::new(service), Arc::new(clipboard));
        assert_eq!(uc.execute().await, Err(ActionError::ClipboardEmpty));
    }

    #[tokio::test]
    async fn unreadable_clipboard_is_a_clipboard_error() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_read()
            .returning(|| Err(anyhow::anyhow!("no display")));
        let mut service = MockService::new();
        service.expect_upload().never();

        let uc = UploadClipboard::new(Arc::new(service), Arc::new(clipboard));
        assert_eq!(
            uc.execute().await,
            Err(ActionError::Clipboard("no display".to_string()))
        );
    }
}
