//! Remote clipboard service port
//!
//! One implementation talks HTTP to the service; the app layer never sees
//! transport details beyond [`TransportError`].

use bytes::Bytes;

use crate::clipboard::{StatusResponse, UploadReceipt, UploadRequest};
use crate::errors::TransportError;

#[async_trait::async_trait]
pub trait ClipboardServicePort: Send + Sync {
    /// `GET /status`
    async fn fetch_status(&self) -> Result<StatusResponse, TransportError>;

    /// `POST /upload`
    async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, TransportError>;

    /// `GET /download/file`
    async fn download_file(&self) -> Result<Bytes, TransportError>;

    /// `GET /download/image`
    async fn download_image(&self) -> Result<Bytes, TransportError>;

    /// `DELETE /clear`
    async fn clear(&self) -> Result<(), TransportError>;

    /// Address of the current image, shown by image views and copied by the
    /// copy action.
    fn image_url(&self) -> String;
}
