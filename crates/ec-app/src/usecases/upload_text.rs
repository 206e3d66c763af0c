use std::sync::Arc;

use ec_core::ports::ClipboardServicePort;
use ec_core::{UploadReceipt, UploadRequest};
use tracing::{info, info_span, Instrument};

use crate::errors::ActionError;

/// Replace the remote clipboard with text.
pub struct UploadText {
    service: Arc<dyn ClipboardServicePort>,
}

impl UploadText {
    pub fn new(service: Arc<dyn ClipboardServicePort>) -> Self {
        Self { service }
    }

    /// Uploads `text` as-is. Empty or whitespace-only text is rejected
    /// without a request.
    pub async fn execute(&self, text: &str) -> Result<UploadReceipt, ActionError> {
        if text.trim().is_empty() {
            return Err(ActionError::EmptyText);
        }

        let request = UploadRequest::text(text);
        let span = info_span!("usecase.upload_text.execute", chars = text.chars().count());

        async {
            let receipt = self.service.upload(request).await?;
            info!(status = ?receipt.status, timestamp = ?receipt.timestamp, "text uploaded");
            Ok(receipt)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::MockService;
    use ec_core::clipboard::meta_keys;
    use ec_core::{ContentKind, TransportError};

    #[tokio::test]
    async fn whitespace_only_text_sends_nothing() {
        let mut service = MockService::new();
        service.expect_upload().never();
        let uc = UploadText::new(Arc::new(service));

        assert_eq!(uc.execute("").await, Err(ActionError::EmptyText));
        assert_eq!(uc.execute(" \n\t ").await, Err(ActionError::EmptyText));
    }

    #[tokio::test]
    async fn sends_text_with_character_length() {
        let mut service = MockService::new();
        service
            .expect_upload()
            .withf(|req| {
                req.kind == ContentKind::Text
                    && req.content == "héllo"
                    && req.metadata.get_u64(meta_keys::LENGTH) == Some(5)
            })
            .times(1)
            .returning(|_| Ok(UploadReceipt::default()));
        let uc = UploadText::new(Arc::new(service));

        assert!(uc.execute("héllo").await.is_ok());
    }

    #[tokio::test]
    async fn transport_failure_is_returned() {
        let mut service = MockService::new();
        service
            .expect_upload()
            .returning(|_| Err(TransportError::Timeout));
        let uc = UploadText::new(Arc::new(service));

        assert_eq!(
            uc.execute("hello").await,
            Err(ActionError::Transport(TransportError::Timeout))
        );
    }
}
