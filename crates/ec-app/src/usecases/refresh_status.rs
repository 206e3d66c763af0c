use std::sync::Arc;

use ec_core::ports::ClipboardServicePort;
use ec_core::{ClipboardSnapshot, TransportError};
use tracing::{debug, info_span, Instrument};

/// Fetch the service's current clipboard.
pub struct RefreshStatus {
    service: Arc<dyn ClipboardServicePort>,
}

impl RefreshStatus {
    pub fn new(service: Arc<dyn ClipboardServicePort>) -> Self {
        Self { service }
    }

    /// Returns the current snapshot, or `None` when the service holds no data.
    pub async fn execute(&self) -> Result<Option<ClipboardSnapshot>, TransportError> {
        let span = info_span!("usecase.refresh_status.execute");

        async {
            let status = self.service.fetch_status().await?;
            debug!(has_data = status.has_data, kind = ?status.kind, "status fetched");
            Ok(status.into_snapshot())
        }
        .instrument(span)
        .await
    }
}
