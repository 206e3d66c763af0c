use std::path::PathBuf;
use std::sync::Arc;

use ec_core::ports::{ClipboardServicePort, DownloadSinkPort, SystemClipboardPort};
use ec_core::{ClipboardSnapshot, ContentKind};
use tracing::{info, info_span, warn, Instrument};

use crate::errors::ActionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadTarget {
    File,
    Image,
}

impl DownloadTarget {
    pub fn for_snapshot(snapshot: &ClipboardSnapshot) -> Option<Self> {
        match snapshot.kind {
            ContentKind::File => Some(DownloadTarget::File),
            ContentKind::Image => Some(DownloadTarget::Image),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DownloadTarget::File => "file",
            DownloadTarget::Image => "image",
        }
    }
}

/// Where a download ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDownload {
    pub path: PathBuf,
    /// Whether the saved path was put on the system clipboard.
    pub path_copied: bool,
}

/// Download the current file or image into the download directory, then
/// put the saved path on the system clipboard.
pub struct DownloadContent {
    service: Arc<dyn ClipboardServicePort>,
    downloads: Arc<dyn DownloadSinkPort>,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl DownloadContent {
    pub fn new(
        service: Arc<dyn ClipboardServicePort>,
        downloads: Arc<dyn DownloadSinkPort>,
        clipboard: Arc<dyn SystemClipboardPort>,
    ) -> Self {
        Self {
            service,
            downloads,
            clipboard,
        }
    }

    /// A clipboard failure after saving does not fail the download.
    pub async fn execute(
        &self,
        snapshot: Option<&ClipboardSnapshot>,
    ) -> Result<SavedDownload, ActionError> {
        let (snapshot, target) = snapshot
            .and_then(|s| DownloadTarget::for_snapshot(s).map(|t| (s, t)))
            .ok_or(ActionError::NoContent("download"))?;

        let span = info_span!("usecase.download_content.execute", target = target.label());

        async {
            let (bytes, name) = match target {
                DownloadTarget::File => (
                    self.service.download_file().await?,
                    snapshot.download_file_name(),
                ),
                DownloadTarget::Image => (
                    self.service.download_image().await?,
                    snapshot.download_image_name(),
                ),
            };

            let path = self
                .downloads
                .save(&name, &bytes)
                .await
                .map_err(|e| ActionError::Save(format!("{e:#}")))?;

            info!(path = %path.display(), bytes = bytes.len(), "download saved");

            let path_copied = match self.clipboard.write_text(&path.to_string_lossy()).await {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "could not copy saved path to system clipboard");
                    false
                }
            };
            Ok(SavedDownload { path, path_copied })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{snapshot, MockClipboard, MockService, MockSink};
    use bytes::Bytes;
    use ec_core::clipboard::meta_keys;
    use ec_core::{Metadata, TransportError};

    #[tokio::test]
    async fn downloads_file_under_declared_name() {
        let mut service = MockService::new();
        service
            .expect_download_file()
            .times(1)
            .returning(|| Ok(Bytes::from_static(b"%PDF")));
        let mut sink = MockSink::new();
        sink.expect_save()
            .withf(|name, bytes| name == "report.pdf" && bytes.to_vec() == b"%PDF".to_vec())
            .returning(|name, _| Ok(PathBuf::from("/dl").join(name)));

        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text == "/dl/report.pdf")
            .times(1)
            .returning(|_| Ok(()));

        let uc = DownloadContent::new(Arc::new(service), Arc::new(sink), Arc::new(clipboard));
        let snap = snapshot(
            ContentKind::File,
            None,
            Metadata::new().with(meta_keys::FILENAME, "report.pdf"),
        );

        let saved = uc.execute(Some(&snap)).await.unwrap();
        assert_eq!(
            saved,
            SavedDownload {
                path: PathBuf::from("/dl/report.pdf"),
                path_copied: true,
            }
        );
    }

    #[tokio::test]
    async fn downloads_image_with_lowercased_format() {
        let mut service = MockService::new();
        service
            .expect_download_image()
            .returning(|| Ok(Bytes::from_static(b"\x89PNG")));
        let mut sink = MockSink::new();
        sink.expect_save()
            .withf(|name, _| name == "clipboard_image.jpeg")
            .returning(|name, _| Ok(PathBuf::from(name)));

        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(anyhow::anyhow!("no display")));

        let uc = DownloadContent::new(Arc::new(service), Arc::new(sink), Arc::new(clipboard));
        let snap = snapshot(
            ContentKind::Image,
            None,
            Metadata::new().with(meta_keys::FORMAT, "JPEG"),
        );

        // The file is saved even when the path cannot be copied.
        let saved = uc.execute(Some(&snap)).await.unwrap();
        assert_eq!(saved.path, PathBuf::from("clipboard_image.jpeg"));
        assert!(!saved.path_copied);
    }

    #[tokio::test]
    async fn text_has_nothing_to_download() {
        let mut service = MockService::new();
        service.expect_download_file().never();
        service.expect_download_image().never();
        let uc = DownloadContent::new(
            Arc::new(service),
            Arc::new(MockSink::new()),
            Arc::new(MockClipboard::new()),
        );

        let snap = snapshot(ContentKind::Text, Some("x"), Metadata::new());
        assert_eq!(
            uc.execute(Some(&snap)).await,
            Err(ActionError::NoContent("download"))
        );
    }

    #[tokio::test]
    async fn transport_failure_saves_nothing() {
        let mut service = MockService::new();
        service
            .expect_download_file()
            .returning(|| Err(TransportError::Status(404)));
        let mut sink = MockSink::new();
        sink.expect_save().never();
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().never();

        let uc = DownloadContent::new(Arc::new(service), Arc::new(sink), Arc::new(clipboard));
        let snap = snapshot(ContentKind::File, None, Metadata::new());

        assert_eq!(
            uc.execute(Some(&snap)).await,
            Err(ActionError::Transport(TransportError::Status(404)))
        );
    }
}
