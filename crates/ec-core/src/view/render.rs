//! Content renderer: maps a snapshot to its display variant.
//!
//! Rendering is a pure function of the snapshot, the expand flag and the
//! image URL. Hosts (terminal, GUI) turn the resulting [`ContentView`] into
//! whatever widgets they draw.

use crate::clipboard::{meta_keys, ClipboardSnapshot, ContentKind};

use super::format::{format_file_size, format_timestamp, needs_truncation, truncate_text};

pub const EMPTY_TITLE: &str = "No clipboard data available";
pub const EMPTY_HINT: &str = "Upload something using the EasyCopy client";
pub const UNKNOWN_CONTENT: &str = "Unknown content type";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView {
    /// Possibly truncated preview.
    pub display: String,
    /// Untruncated content, used by the copy action.
    pub full: String,
    /// Declared length, or the character count when undeclared.
    pub length: u64,
    /// Whether a "Show More / Show Less" toggle is offered.
    pub can_toggle: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub format: String,
    pub size: String,
    pub dimensions: Option<String>,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileView {
    pub filename: String,
    pub size: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Empty,
    Text(TextView),
    Image(ImageView),
    File(FileView),
    Unknown { kind: String },
}

/// Render the content area for `snapshot`.
pub fn render(
    snapshot: Option<&ClipboardSnapshot>,
    text_expanded: bool,
    image_url: &str,
) -> ContentView {
    let Some(snapshot) = snapshot else {
        return ContentView::Empty;
    };

    let metadata = &snapshot.metadata;
    match &snapshot.kind {
        ContentKind::Text => {
            let full = snapshot.text().to_string();
            let length = metadata
                .get_u64(meta_keys::LENGTH)
                .filter(|len| *len > 0)
                .unwrap_or_else(|| full.chars().count() as u64);
            ContentView::Text(TextView {
                display: truncate_text(&full, text_expanded),
                can_toggle: needs_truncation(&full),
                expanded: text_expanded,
                length,
                full,
            })
        }
        ContentKind::Image => ContentView::Image(ImageView {
            format: metadata
                .display(meta_keys::FORMAT)
                .unwrap_or_else(|| "Unknown".to_string()),
            size: format_file_size(metadata.get_u64(meta_keys::SIZE).unwrap_or(0)),
            dimensions: metadata.display(meta_keys::DIMENSIONS),
            image_url: image_url.to_string(),
        }),
        ContentKind::File => ContentView::File(FileView {
            filename: metadata
                .display(meta_keys::FILENAME)
                .unwrap_or_else(|| "Unknown".to_string()),
            size: format_file_size(metadata.get_u64(meta_keys::SIZE).unwrap_or(0)),
            mime_type: metadata
                .display(meta_keys::MIME_TYPE)
                .unwrap_or_else(|| "Unknown".to_string()),
        }),
        ContentKind::Other(kind) => ContentView::Unknown { kind: kind.clone() },
    }
}

impl ContentView {
    pub fn title(&self) -> &'static str {
        match self {
            ContentView::Empty => EMPTY_TITLE,
            ContentView::Text(_) => "Text Content",
            ContentView::Image(_) => "Image Content",
            ContentView::File(_) => "File Content",
            ContentView::Unknown { .. } => UNKNOWN_CONTENT,
        }
    }

    /// Metadata lines shown under the title, e.g. `Size: 2.00 KB`.
    pub fn metadata_lines(&self) -> Vec<String> {
        match self {
            ContentView::Empty | ContentView::Unknown { .. } => Vec::new(),
            ContentView::Text(text) => vec![format!("Length: {} characters", text.length)],
            ContentView::Image(image) => {
                let mut lines = vec![
                    format!("Format: {}", image.format),
                    format!("Size: {}", image.size),
                ];
                if let Some(dimensions) = &image.dimensions {
                    lines.push(format!("Dimensions: {dimensions}"));
                }
                lines
            }
            ContentView::File(file) => vec![
                format!("Filename: {}", file.filename),
                format!("Size: {}", file.size),
                format!("Type: {}", file.mime_type),
            ],
        }
    }

    /// Text the copy action puts on the system clipboard, if any.
    pub fn copy_text(&self) -> Option<&str> {
        match self {
            ContentView::Text(text) => Some(&text.full),
            ContentView::Image(image) => Some(&image.image_url),
            _ => None,
        }
    }
}

/// Status line shown above the content when a snapshot is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoBar {
    pub kind: String,
    pub uploaded: String,
}

pub fn render_info_bar(snapshot: Option<&ClipboardSnapshot>) -> Option<InfoBar> {
    snapshot.map(|snapshot| InfoBar {
        kind: snapshot.kind.to_string(),
        uploaded: format_timestamp(snapshot.timestamp.as_deref()),
    })
}
