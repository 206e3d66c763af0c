//! # ec-platform
//!
//! Adapters implementing the `ec-core` ports against the operating system
//! and the remote clipboard service.

pub mod adapters;
pub mod app_dirs;
pub mod http;

pub use adapters::{
    ArboardClipboard, DownloadDirectory, FsFileSource, SystemClock, TerminalNotifier,
};
pub use app_dirs::DirsAppDirsAdapter;
pub use http::HttpClipboardService;
