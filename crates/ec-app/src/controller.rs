//! Clipboard view-sync controller.
//!
//! Owns the [`ViewState`] and mediates between the status poller, the
//! auto-refresh timer and user-triggered actions:
//!
//! - every poll is tagged with a sequence number at issue time, and a
//!   response older than the last applied one is dropped;
//! - one busy flag covers both upload variants, so a second upload while one
//!   is running is rejected without a request;
//! - every network call races a controller-wide cancellation token fired by
//!   [`ClipboardController::shutdown`].
//!
//! The state mutex is never held across a network call. Hosts observe
//! changes through [`ClipboardController::subscribe`].

use std::future::Future;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use ec_core::config::defaults::{DEFAULT_AUTO_REFRESH, DEFAULT_POLL_INTERVAL_MS};
use ec_core::ports::{ClipboardServicePort, ClockPort, NotifierPort};
use ec_core::view::ContentView;
use ec_core::{Notice, TransportError};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::auto_refresh::AutoRefreshTimer;
use crate::deps::ControllerDeps;
use crate::errors::ActionError;
use crate::state::{PollApplication, UploadKind, ViewState};
use crate::usecases::{
    ClearRemoteClipboard, CopyContent, DownloadContent, DownloadTarget, RefreshStatus,
    SavedDownload, UploadClipboard, UploadFile, UploadText,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    pub poll_interval: Duration,
    /// Whether polling is enabled when the controller starts.
    pub auto_refresh: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            auto_refresh: DEFAULT_AUTO_REFRESH,
        }
    }
}

#[derive(Clone)]
pub struct ClipboardController {
    inner: Arc<Inner>,
}

struct Inner {
    service: Arc<dyn ClipboardServicePort>,
    notifier: Arc<dyn NotifierPort>,
    clock: Arc<dyn ClockPort>,

    refresh_status: RefreshStatus,
    copy_content: CopyContent,
    download_content: DownloadContent,
    upload_text: UploadText,
    upload_file: UploadFile,
    upload_clipboard: UploadClipboard,
    clear_clipboard: ClearRemoteClipboard,

    state: Mutex<ViewState>,
    next_seq: AtomicU64,
    upload_busy: AtomicBool,
    cancel: CancellationToken,
    timer: AutoRefreshTimer,
    changes: watch::Sender<u64>,
}

impl ClipboardController {
    pub fn new(deps: ControllerDeps, settings: ControllerSettings) -> Self {
        let ControllerDeps {
            service,
            clipboard,
            files,
            downloads,
            notifier,
            clock,
        } = deps;
        let (changes, _) = watch::channel(0);

        Self {
            inner: Arc::new(Inner {
                refresh_status: RefreshStatus::new(service.clone()),
                copy_content: CopyContent::new(service.clone(), clipboard.clone()),
                download_content: DownloadContent::new(
                    service.clone(),
                    downloads,
                    clipboard.clone(),
                ),
                upload_text: UploadText::new(service.clone()),
                upload_file: UploadFile::new(service.clone(), files),
                upload_clipboard: UploadClipboard::new(service.clone(), clipboard),
                clear_clipboard: ClearRemoteClipboard::new(service.clone()),
                service,
                notifier,
                clock,
                state: Mutex::new(ViewState::new(settings.auto_refresh)),
                next_seq: AtomicU64::new(0),
                upload_busy: AtomicBool::new(false),
                cancel: CancellationToken::new(),
                timer: AutoRefreshTimer::new(settings.poll_interval),
                changes,
            }),
        }
    }

    /// Polls once, then schedules the auto-refresh loop when enabled.
    pub async fn start(&self) {
        info!(
            poll_interval_ms = self.inner.timer.period().as_millis() as u64,
            "starting clipboard controller"
        );
        self.refresh().await;
        if self.inner.state.lock().await.auto_refresh {
            self.schedule_auto_refresh().await;
        }
    }

    /// Cancels in-flight requests and stops the auto-refresh loop.
    pub async fn shutdown(&self) {
        if self.inner.cancel.is_cancelled() {
            return;
        }
        info!("shutting down clipboard controller");
        self.inner.cancel.cancel();
        self.inner.timer.stop().await;
        self.notify_changed();
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    /// Receiver bumped after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.changes.subscribe()
    }

    pub async fn state(&self) -> ViewState {
        self.inner.state.lock().await.clone()
    }

    pub async fn content_view(&self) -> ContentView {
        let image_url = self.inner.service.image_url();
        self.inner.state.lock().await.content_view(&image_url)
    }

    pub fn image_url(&self) -> String {
        self.inner.service.image_url()
    }

    /// Issues one status poll and applies its outcome unless a newer poll
    /// was applied first.
    pub async fn refresh(&self) {
        if self.is_shut_down() {
            return;
        }

        let seq = self.inner.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.lock().await.poll_started();
        self.notify_changed();

        let result = tokio::select! {
            biased;
            _ = self.inner.cancel.cancelled() => None,
            result = self.inner.refresh_status.execute() => Some(result),
        };

        {
            let mut state = self.inner.state.lock().await;
            match result {
                None => {
                    state.poll_abandoned();
                    debug!(seq, "status poll cancelled");
                }
                Some(result) => {
                    if let Err(err) = &result {
                        warn!(seq, error = %err, "status poll failed");
                    }
                    let now_ms = self.inner.clock.now_ms();
                    if state.apply_poll(seq, result, now_ms) == PollApplication::Stale {
                        debug!(
                            seq,
                            last_applied_seq = state.last_applied_seq,
                            "discarding stale status response"
                        );
                    }
                }
            }
        }
        self.notify_changed();
    }

    /// Runs [`refresh`](Self::refresh) on its own task.
    pub fn spawn_refresh(&self) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move { controller.refresh().await })
    }

    /// Enabling schedules a fresh timer without fetching immediately;
    /// disabling cancels the timer but leaves in-flight polls alone.
    pub async fn set_auto_refresh(&self, enabled: bool) {
        if self.is_shut_down() {
            return;
        }
        {
            let mut state = self.inner.state.lock().await;
            if state.auto_refresh == enabled {
                return;
            }
            state.auto_refresh = enabled;
        }

        if enabled {
            self.schedule_auto_refresh().await;
        } else {
            self.inner.timer.stop().await;
        }
        info!(enabled, "auto-refresh toggled");
        self.notify_changed();
    }

    pub async fn toggle_auto_refresh(&self) -> bool {
        let enabled = !self.inner.state.lock().await.auto_refresh;
        self.set_auto_refresh(enabled).await;
        enabled
    }

    pub async fn toggle_text_expanded(&self) -> bool {
        let expanded = {
            let mut state = self.inner.state.lock().await;
            state.text_expanded = !state.text_expanded;
            state.text_expanded
        };
        self.notify_changed();
        expanded
    }

    pub async fn set_upload_text(&self, text: impl Into<String>) {
        self.inner.state.lock().await.upload_text = text.into();
        self.notify_changed();
    }

    pub async fn toggle_upload_panel(&self) -> bool {
        let open = {
            let mut state = self.inner.state.lock().await;
            state.upload_panel_open = !state.upload_panel_open;
            state.upload_panel_open
        };
        self.notify_changed();
        open
    }

    /// Copies the current text, or the image URL for images.
    pub async fn copy_content(&self) -> Result<String, ActionError> {
        let snapshot = self.inner.state.lock().await.clipboard.clone();
        let result = self.inner.copy_content.execute(snapshot.as_ref()).await;

        self.notify(match &result {
            Ok(_) => Notice::success("Copied to clipboard!"),
            Err(ActionError::NoContent(_)) => Notice::failure("Nothing to copy"),
            Err(_) => Notice::failure("Failed to copy to clipboard"),
        });
        result
    }

    /// Downloads the current file or image into the download directory and
    /// copies the saved path to the system clipboard.
    pub async fn download(&self) -> Result<SavedDownload, ActionError> {
        let snapshot = self.inner.state.lock().await.clipboard.clone();
        let target = snapshot.as_ref().and_then(DownloadTarget::for_snapshot);

        let result = self
            .cancellable(self.inner.download_content.execute(snapshot.as_ref()))
            .await;

        match (&result, target) {
            (Ok(saved), _) => self.notify(Notice::success(saved_message(saved))),
            (Err(err), Some(target)) => {
                warn!(error = %err, target = target.label(), "download failed");
                self.notify(Notice::failure(format!("Failed to download {}", target.label())));
            }
            (Err(_), None) => self.notify(Notice::failure("Nothing to download")),
        }
        result
    }

    /// Uploads the text buffer.
    ///
    /// On success the buffer is cleared, the panel closed and the status
    /// re-polled once. On failure the buffer is kept.
    pub async fn submit_upload_text(&self) -> Result<(), ActionError> {
        let text = self.inner.state.lock().await.upload_text.clone();
        if text.trim().is_empty() {
            self.notify(Notice::failure(ActionError::EmptyText.to_string()));
            return Err(ActionError::EmptyText);
        }

        let upload = self.inner.upload_text.execute(&text);
        self.run_upload(UploadKind::Text, upload).await
    }

    /// Uploads the file at `path`, then re-polls once on success.
    pub async fn upload_file(&self, path: &Path) -> Result<(), ActionError> {
        let upload = self.inner.upload_file.execute(path);
        self.run_upload(UploadKind::File, upload).await
    }

    /// Uploads the local system clipboard, then re-polls once on success.
    pub async fn upload_clipboard(&self) -> Result<(), ActionError> {
        let upload = self.inner.upload_clipboard.execute();
        self.run_upload(UploadKind::Clipboard, upload).await
    }

    /// Clears the remote clipboard, then re-polls once on success.
    pub async fn clear(&self) -> Result<(), ActionError> {
        let result = self
            .cancellable(self.inner.clear_clipboard.execute())
            .await;

        match &result {
            Ok(()) => {
                self.notify(Notice::success("Clipboard cleared"));
                self.refresh().await;
            }
            Err(err) => {
                self.inner.state.lock().await.error = Some(err.to_string());
                self.notify_changed();
                self.notify(Notice::failure(format!("Failed to clear clipboard: {err}")));
            }
        }
        result
    }

    async fn run_upload<T>(
        &self,
        kind: UploadKind,
        upload: impl Future<Output = Result<T, ActionError>>,
    ) -> Result<(), ActionError> {
        let Some(busy) = BusyGuard::acquire(&self.inner.upload_busy) else {
            warn!(?kind, "upload rejected, another upload is running");
            self.notify(Notice::failure(ActionError::UploadInProgress.to_string()));
            return Err(ActionError::UploadInProgress);
        };

        self.inner.state.lock().await.begin_upload(kind);
        self.notify_changed();

        let result = self.cancellable(upload).await.map(|_| ());

        let banner = result.as_ref().err().map(upload_banner);
        self.inner.state.lock().await.finish_upload(kind, banner);
        self.notify_changed();
        drop(busy);

        match &result {
            Ok(()) => {
                self.notify(Notice::success(match kind {
                    UploadKind::Text => "Text uploaded successfully!",
                    UploadKind::File => "File uploaded successfully!",
                    UploadKind::Clipboard => "Clipboard uploaded successfully!",
                }));
                self.refresh().await;
            }
            Err(ActionError::Read(err)) => {
                debug!(error = %err, "file read failed");
                self.notify(Notice::failure("Failed to read file"));
            }
            Err(err @ ActionError::ClipboardEmpty) => {
                self.notify(Notice::failure(err.to_string()));
            }
            Err(err) => {
                self.notify(Notice::failure(format!(
                    "Failed to upload {}: {err}",
                    kind.label()
                )));
            }
        }
        result
    }

    async fn cancellable<T>(
        &self,
        action: impl Future<Output = Result<T, ActionError>>,
    ) -> Result<T, ActionError> {
        tokio::select! {
            biased;
            _ = self.inner.cancel.cancelled() => Err(TransportError::Cancelled.into()),
            result = action => result,
        }
    }

    async fn schedule_auto_refresh(&self) {
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        self.inner
            .timer
            .start(move || {
                if let Some(inner) = weak.upgrade() {
                    ClipboardController { inner }.spawn_refresh();
                }
            })
            .await;
    }

    fn notify(&self, notice: Notice) {
        if notice.is_failure() {
            debug!(message = %notice.message, "action failed");
        }
        self.inner.notifier.notify(&notice);
    }

    fn notify_changed(&self) {
        self.inner.changes.send_modify(|version| *version = version.wrapping_add(1));
    }
}

fn saved_message(saved: &SavedDownload) -> String {
    if saved.path_copied {
        format!("Saved to {} (path copied to clipboard)", saved.path.display())
    } else {
        format!("Saved to {}", saved.path.display())
    }
}

fn upload_banner(err: &ActionError) -> String {
    match err {
        ActionError::Read(_) => "Failed to read file".to_string(),
        other => other.to_string(),
    }
}

/// Holds the shared upload flag; releases it on drop.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn busy_guard_is_exclusive_and_released_on_drop() {
        let flag = AtomicBool::new(false);

        let guard = BusyGuard::acquire(&flag).unwrap();
        assert!(BusyGuard::acquire(&flag).is_none());

        drop(guard);
        assert!(BusyGuard::acquire(&flag).is_some());
    }

    #[test]
    fn upload_banner_hides_read_details() {
        let err = ActionError::Read(ec_core::ReadError::NotFound("/x".into()));
        assert_eq!(upload_banner(&err), "Failed to read file");
        assert_eq!(
            upload_banner(&ActionError::Transport(TransportError::Timeout)),
            "request timed out"
        );
    }

    #[test]
    fn saved_message_mentions_copied_path() {
        let mut saved = SavedDownload {
            path: PathBuf::from("/dl/a.txt"),
            path_copied: true,
        };
        assert_eq!(saved_message(&saved), "Saved to /dl/a.txt (path copied to clipboard)");

        saved.path_copied = false;
        assert_eq!(saved_message(&saved), "Saved to /dl/a.txt");
    }

    #[test]
    fn default_settings_poll_every_five_seconds() {
        let settings = ControllerSettings::default();
        assert_eq!(settings.poll_interval, Duration::from_millis(5000));
        assert!(settings.auto_refresh);
    }
}
