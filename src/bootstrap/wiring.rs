//! # Dependency Wiring
//!
//! The only place that depends on `ec-platform` and `ec-app` together.
//! Builds the concrete adapters from the resolved [`ClientSettings`] and
//! hands them to the controller as port trait objects. No decisions are
//! made here; settings were validated in [`super::config`].

use std::sync::Arc;

use ec_app::{ClipboardController, ControllerDeps, ControllerSettings};
use ec_platform::{
    ArboardClipboard, DownloadDirectory, FsFileSource, HttpClipboardService, SystemClock,
    TerminalNotifier,
};

use super::config::ClientSettings;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors while constructing adapters
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Assemble the controller dependencies from effective settings.
///
/// # Errors
///
/// Returns `WiringError::HttpClientInit` if the HTTP client cannot be built.
pub fn wire_dependencies(settings: &ClientSettings) -> WiringResult<ControllerDeps> {
    let service = HttpClipboardService::new(settings.endpoints.clone(), settings.request_timeout)
        .map_err(|e| WiringError::HttpClientInit(format!("{e:#}")))?;

    tracing::debug!(
        server = %settings.endpoints.base(),
        download_dir = %settings.download_dir.display(),
        "wiring controller dependencies"
    );

    Ok(ControllerDeps {
        service: Arc::new(service),
        clipboard: Arc::new(ArboardClipboard::new()),
        files: Arc::new(FsFileSource::new()),
        downloads: Arc::new(DownloadDirectory::new(settings.download_dir.clone())),
        notifier: Arc::new(TerminalNotifier),
        clock: Arc::new(SystemClock),
    })
}

/// Build a controller ready to [`start`](ClipboardController::start).
pub fn wire_controller(settings: &ClientSettings) -> WiringResult<ClipboardController> {
    let deps = wire_dependencies(settings)?;
    Ok(ClipboardController::new(
        deps,
        ControllerSettings {
            poll_interval: settings.poll_interval,
            auto_refresh: settings.auto_refresh,
        },
    ))
}
