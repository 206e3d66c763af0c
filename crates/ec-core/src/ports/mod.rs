//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `ec-app` and the
//! adapters in `ec-platform`. Use cases only ever see `Arc<dyn Port>`, so
//! tests substitute fakes or `mockall` mocks.

mod app_dirs;
mod clock;
mod download_sink;
pub mod errors;
mod file_source;
mod notifier;
mod service;
mod system_clipboard;

pub use app_dirs::AppDirsPort;
pub use clock::ClockPort;
pub use download_sink::DownloadSinkPort;
pub use errors::AppDirsError;
pub use file_source::FileSourcePort;
pub use notifier::NotifierPort;
pub use service::ClipboardServicePort;
pub use system_clipboard::SystemClipboardPort;
