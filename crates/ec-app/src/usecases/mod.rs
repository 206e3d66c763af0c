//! One use case per user action.
//!
//! Use cases perform the side effect and report a typed result. They never
//! touch the view state; the controller applies their outcome.

pub mod clear_clipboard;
pub mod copy_content;
pub mod download_content;
pub mod refresh_status;
pub mod upload_clipboard;
pub mod upload_file;
pub mod upload_text;

pub use clear_clipboard::ClearRemoteClipboard;
pub use copy_content::CopyContent;
pub use download_content::{DownloadContent, DownloadTarget, SavedDownload};
pub use refresh_status::RefreshStatus;
pub use upload_clipboard::UploadClipboard;
pub use upload_file::UploadFile;
pub use upload_text::UploadText;

#[cfg(test)]
pub(crate) mod test_support;
