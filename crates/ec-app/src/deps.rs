//! # Controller Dependencies
//!
//! Parameter grouping for [`ClipboardController`](crate::ClipboardController)
//! construction. Not a builder: no defaults, no optional fields, no logic.

use std::sync::Arc;

use ec_core::ports::*;

pub struct ControllerDeps {
    // Remote service
    pub service: Arc<dyn ClipboardServicePort>,

    // Local machine
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub files: Arc<dyn FileSourcePort>,
    pub downloads: Arc<dyn DownloadSinkPort>,

    // Host
    pub notifier: Arc<dyn NotifierPort>,
    pub clock: Arc<dyn ClockPort>,
}
