use serde::{Deserialize, Serialize};

use super::{meta_keys, ContentKind, Metadata};

/// The clipboard content currently stored by the service.
///
/// A snapshot is atomic: `kind`, `content` and `metadata` are always
/// consistent with each other as delivered by the service. The client never
/// patches a snapshot, it replaces it whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardSnapshot {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ClipboardSnapshot {
    /// Text payload, empty when the snapshot carries none.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Whether `other` represents a different clipboard entry.
    ///
    /// Metadata is not compared: the service derives it from the payload.
    pub fn differs_from(&self, other: &ClipboardSnapshot) -> bool {
        self.kind != other.kind || self.content != other.content || self.timestamp != other.timestamp
    }

    /// Name under which a downloaded file is saved.
    pub fn download_file_name(&self) -> String {
        self.metadata
            .get_str(meta_keys::FILENAME)
            .unwrap_or("download")
            .to_string()
    }

    /// Name under which a downloaded image is saved.
    pub fn download_image_name(&self) -> String {
        let ext = self
            .metadata
            .get_str(meta_keys::FORMAT)
            .map(str::to_lowercase)
            .unwrap_or_else(|| "png".to_string());
        format!("clipboard_image.{ext}")
    }
}

/// Body of `GET /status`.
///
/// When `has_data` is false the service sends nothing else, and any other
/// field is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub has_data: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<ContentKind>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl StatusResponse {
    pub fn empty() -> Self {
        Self {
            has_data: false,
            kind: None,
            content: None,
            size: None,
            metadata: Metadata::default(),
            timestamp: None,
        }
    }

    /// Converts the response into the snapshot it describes, or `None` when
    /// the service holds no data.
    pub fn into_snapshot(self) -> Option<ClipboardSnapshot> {
        if !self.has_data {
            return None;
        }
        Some(ClipboardSnapshot {
            kind: self.kind.unwrap_or_else(|| ContentKind::Other(String::new())),
            content: self.content,
            metadata: self.metadata,
            timestamp: self.timestamp,
        })
    }
}

impl From<ClipboardSnapshot> for StatusResponse {
    fn from(snapshot: ClipboardSnapshot) -> Self {
        Self {
            has_data: true,
            size: snapshot.content.as_ref().map(|c| c.len() as u64),
            kind: Some(snapshot.kind),
            content: snapshot.content,
            metadata: snapshot.metadata,
            timestamp: snapshot.timestamp,
        }
    }
}
