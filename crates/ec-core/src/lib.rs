//! # ec-core
//!
//! Core domain models and view logic for the EasyCopy client.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the clipboard snapshot model, the content renderer, formatting helpers,
//! the port traits implemented by `ec-platform`, and the error taxonomy.

// Public module exports
pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod notice;
pub mod ports;
pub mod view;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ClipboardSnapshot, ContentKind, LocalClipboardContent, Metadata, PngImage, SelectedFile,
    StatusResponse, UploadReceipt, UploadRequest,
};
pub use config::AppConfig;
pub use endpoints::{EndpointError, Endpoints};
pub use errors::{ReadError, TransportError};
pub use notice::{Notice, NoticeLevel};
pub use view::{render, ContentView};
