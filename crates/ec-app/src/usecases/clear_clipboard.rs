use std::sync::Arc;

use ec_core::ports::ClipboardServicePort;
use tracing::{info, info_span, Instrument};

use crate::errors::ActionError;

/// Remove whatever the service currently stores.
pub struct ClearRemoteClipboard {
    service: Arc<dyn ClipboardServicePort>,
}

impl ClearRemoteClipboard {
    pub fn new(service: Arc<dyn ClipboardServicePort>) -> Self {
        Self { service }
    }

    pub async fn execute(&self) -> Result<(), ActionError> {
        async {
            self.service.clear().await?;
            info!("remote clipboard cleared");
            Ok(())
        }
        .instrument(info_span!("usecase.clear_clipboard.execute"))
        .await
    }
}
