//! The controller's single view state object.

use ec_core::view::{render, render_info_bar, ContentView, InfoBar};
use ec_core::{ClipboardSnapshot, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Text,
    File,
    /// Whatever the local system clipboard holds.
    Clipboard,
}

impl UploadKind {
    pub fn label(self) -> &'static str {
        match self {
            UploadKind::Text => "text",
            UploadKind::File => "file",
            UploadKind::Clipboard => "clipboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading(UploadKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Succeeded(UploadKind),
    Failed(UploadKind),
}

/// What happened to a completed poll response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollApplication {
    Applied,
    /// A newer poll was already applied; the response was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Last applied snapshot, `None` when the service holds no data.
    pub clipboard: Option<ClipboardSnapshot>,
    /// Epoch ms of the last applied poll that carried data.
    pub last_updated: Option<i64>,
    pub auto_refresh: bool,
    pub text_expanded: bool,
    pub upload_text: String,
    pub upload_panel_open: bool,
    /// Banner message of the last failed poll or action.
    pub error: Option<String>,
    pub in_flight_polls: usize,
    pub upload_phase: UploadPhase,
    pub last_upload: Option<UploadOutcome>,
    pub last_applied_seq: u64,
}

impl ViewState {
    pub fn new(auto_refresh: bool) -> Self {
        Self {
            clipboard: None,
            last_updated: None,
            auto_refresh,
            text_expanded: false,
            upload_text: String::new(),
            upload_panel_open: false,
            error: None,
            in_flight_polls: 0,
            upload_phase: UploadPhase::Idle,
            last_upload: None,
            last_applied_seq: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight_polls > 0
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.upload_phase, UploadPhase::Uploading(_))
    }

    pub fn poll_started(&mut self) {
        self.in_flight_polls += 1;
    }

    /// A poll ended without a response (cancelled during shutdown).
    pub fn poll_abandoned(&mut self) {
        self.in_flight_polls = self.in_flight_polls.saturating_sub(1);
    }

    /// Applies the outcome of poll `seq`.
    ///
    /// Responses older than the last applied one are dropped, whether they
    /// succeeded or failed. A failed poll keeps the previous snapshot.
    pub fn apply_poll(
        &mut self,
        seq: u64,
        result: Result<Option<ClipboardSnapshot>, TransportError>,
        now_ms: i64,
    ) -> PollApplication {
        self.in_flight_polls = self.in_flight_polls.saturating_sub(1);
        if seq <= self.last_applied_seq {
            return PollApplication::Stale;
        }
        self.last_applied_seq = seq;

        match result {
            Ok(Some(snapshot)) => {
                let changed = self
                    .clipboard
                    .as_ref()
                    .map_or(true, |current| current.differs_from(&snapshot));
                if changed {
                    self.text_expanded = false;
                }
                self.clipboard = Some(snapshot);
                self.last_updated = Some(now_ms);
                self.error = None;
            }
            Ok(None) => {
                self.clipboard = None;
                self.text_expanded = false;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(poll_error_message(&err));
            }
        }
        PollApplication::Applied
    }

    pub fn begin_upload(&mut self, kind: UploadKind) {
        self.upload_phase = UploadPhase::Uploading(kind);
        self.error = None;
    }

    pub fn finish_upload(&mut self, kind: UploadKind, error: Option<String>) {
        self.upload_phase = UploadPhase::Idle;
        match error {
            None => {
                self.last_upload = Some(UploadOutcome::Succeeded(kind));
                if kind == UploadKind::Text {
                    self.upload_text.clear();
                }
                self.upload_panel_open = false;
            }
            Some(message) => {
                self.last_upload = Some(UploadOutcome::Failed(kind));
                self.error = Some(message);
            }
        }
    }

    pub fn content_view(&self, image_url: &str) -> ContentView {
        render(self.clipboard.as_ref(), self.text_expanded, image_url)
    }

    pub fn info_bar(&self) -> Option<InfoBar> {
        render_info_bar(self.clipboard.as_ref())
    }
}

fn poll_error_message(err: &TransportError) -> String {
    match err {
        TransportError::Status(_) => "Failed to fetch clipboard status".to_string(),
        other => other.to_string(),
    }
}
