use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use ec_core::ports::{ClipboardServicePort, DownloadSinkPort, FileSourcePort, SystemClipboardPort};
use ec_core::{
    ClipboardSnapshot, ContentKind, LocalClipboardContent, Metadata, ReadError, SelectedFile, StatusResponse,
    TransportError, UploadReceipt, UploadRequest,
};
use mockall::mock;

pub const IMAGE_URL: &str = "http://localhost:8000/download/image";

mock! {
    pub Service {}

    #[async_trait]
    impl ClipboardServicePort for Service {
        async fn fetch_status(&self) -> Result<StatusResponse, TransportError>;
        async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, TransportError>;
        async fn download_file(&self) -> Result<Bytes, TransportError>;
        async fn download_image(&self) -> Result<Bytes, TransportError>;
        async fn clear(&self) -> Result<(), TransportError>;
        fn image_url(&self) -> String;
    }
}

mock! {
    pub Clipboard {}

    #[async_trait]
    impl SystemClipboardPort for Clipboard {
        async fn write_text(&self, text: &str) -> anyhow::Result<()>;
        async fn read(&self) -> anyhow::Result<LocalClipboardContent>;
    }
}

mock! {
    pub Files {}

    #[async_trait]
    impl FileSourcePort for Files {
        async fn read_file(&self, path: &Path) -> Result<SelectedFile, ReadError>;
    }
}

mock! {
    pub Sink {}

    #[async_trait]
    impl DownloadSinkPort for Sink {
        async fn save(&self, suggested_name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf>;
    }
}

pub fn snapshot(kind: ContentKind, content: Option<&str>, metadata: Metadata) -> ClipboardSnapshot {
    ClipboardSnapshot {
        kind,
        content: content.map(str::to_string),
        metadata,
        timestamp: Some("2025-01-15T10:30:45".to_string()),
    }
}
