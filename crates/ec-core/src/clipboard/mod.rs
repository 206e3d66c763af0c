//! Clipboard domain models.
mod kind;
mod local;
pub mod meta_keys;
mod metadata;
mod selected_file;
mod snapshot;
mod upload;

pub use kind::ContentKind;
pub use local::{LocalClipboardContent, PngImage};
pub use metadata::Metadata;
pub use selected_file::SelectedFile;
pub use snapshot::{ClipboardSnapshot, StatusResponse};
pub use upload::{UploadReceipt, UploadRequest, DEFAULT_MIME_TYPE};

#[cfg(test)]
mod tests;
