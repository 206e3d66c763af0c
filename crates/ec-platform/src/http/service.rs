//! HTTP implementation of [`ClipboardServicePort`].

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use ec_core::ports::ClipboardServicePort;
use ec_core::{Endpoints, StatusResponse, TransportError, UploadReceipt, UploadRequest};
use reqwest::{Client, Response};
use tracing::{debug, warn};
use url::Url;

use super::errors::map_reqwest_error;

pub struct HttpClipboardService {
    client: Client,
    endpoints: Endpoints,
}

impl HttpClipboardService {
    /// Every request gets `timeout` as its deadline.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("easycopy/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_client(client, endpoints))
    }

    pub fn with_client(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_bytes(&self, url: Url) -> Result<Bytes, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body = ensure_success(response)?
            .bytes()
            .await
            .map_err(map_reqwest_error)?;
        debug!(url = %url, bytes = body.len(), "downloaded");
        Ok(body)
    }
}

fn ensure_success(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(status = status.as_u16(), url = %response.url(), "service returned error status");
        Err(TransportError::Status(status.as_u16()))
    }
}

#[async_trait]
impl ClipboardServicePort for HttpClipboardService {
    async fn fetch_status(&self) -> Result<StatusResponse, TransportError> {
        let response = self
            .client
            .get(self.endpoints.status())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body = ensure_success(response)?
            .bytes()
            .await
            .map_err(map_reqwest_error)?;

        serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, TransportError> {
        let response = self
            .client
            .post(self.endpoints.upload())
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body = ensure_success(response)?
            .bytes()
            .await
            .map_err(map_reqwest_error)?;

        // The success body is opaque; read what is recognisable.
        Ok(serde_json::from_slice(&body).unwrap_or_else(|e| {
            debug!(error = %e, "upload response body not understood");
            UploadReceipt::default()
        }))
    }

    async fn download_file(&self) -> Result<Bytes, TransportError> {
        self.get_bytes(self.endpoints.download_file()).await
    }

    async fn download_image(&self) -> Result<Bytes, TransportError> {
        self.get_bytes(self.endpoints.download_image()).await
    }

    async fn clear(&self) -> Result<(), TransportError> {
        let response = self
            .client
            .delete(self.endpoints.clear())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(response)?;
        Ok(())
    }

    fn image_url(&self) -> String {
        self.endpoints.download_image().to_string()
    }
}
