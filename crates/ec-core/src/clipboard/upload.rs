use base64::Engine;
use serde::{Deserialize, Serialize};

use super::{meta_keys, ContentKind, Metadata, PngImage, SelectedFile};

/// MIME type sent when none could be determined for a file.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Body of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRequest {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub content: String,
    pub metadata: Metadata,
}

impl UploadRequest {
    /// Text upload; `length` is the character count of `text`.
    pub fn text(text: &str) -> Self {
        Self {
            kind: ContentKind::Text,
            content: text.to_string(),
            metadata: Metadata::new().with(meta_keys::LENGTH, text.chars().count() as u64),
        }
    }

    /// File upload; the bytes travel base64-encoded (standard alphabet, padded).
    pub fn file(file: &SelectedFile) -> Self {
        let content = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
        let mime_type = file
            .mime_type
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE);

        Self {
            kind: ContentKind::File,
            content,
            metadata: Metadata::new()
                .with(meta_keys::FILENAME, file.name.clone())
                .with(
                    meta_keys::ORIGINAL_PATH,
                    file.original_path.to_string_lossy().into_owned(),
                )
                .with(meta_keys::SIZE, file.size())
                .with(meta_keys::MIME_TYPE, mime_type),
        }
    }

    /// Image upload from the system clipboard, always sent as PNG.
    pub fn image(image: &PngImage) -> Self {
        Self {
            kind: ContentKind::Image,
            content: base64::engine::general_purpose::STANDARD.encode(&image.png),
            metadata: Metadata::new()
                .with(meta_keys::FORMAT, "PNG")
                .with(meta_keys::SIZE, image.size())
                .with(meta_keys::DIMENSIONS, image.dimensions()),
        }
    }
}

/// Success body of `POST /upload`.
///
/// The service treats this as opaque; the fields it usually sends are read
/// when present and only used for logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<ContentKind>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
