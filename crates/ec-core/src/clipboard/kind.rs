use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared content type of a clipboard snapshot.
///
/// The set is open-ended: anything the service sends that is not `text`,
/// `image` or `file` is preserved in [`ContentKind::Other`] and rendered as
/// an unknown content type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentKind {
    Text,
    Image,
    File,
    Other(String),
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
            ContentKind::File => "file",
            ContentKind::Other(raw) => raw,
        }
    }
}

impl From<&str> for ContentKind {
    fn from(value: &str) -> Self {
        match value {
            "text" => ContentKind::Text,
            "image" => ContentKind::Image,
            "file" => ContentKind::File,
            other => ContentKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ContentKind {
    fn from(value: String) -> Self {
        ContentKind::from(value.as_str())
    }
}

impl From<ContentKind> for String {
    fn from(kind: ContentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
