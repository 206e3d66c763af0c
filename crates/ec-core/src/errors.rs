//! Error taxonomy shared by ports and use cases.

use std::path::PathBuf;

use thiserror::Error;

/// Failure talking to the clipboard service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("cannot reach clipboard service: {0}")]
    Unreachable(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

impl TransportError {
    /// HTTP status code for [`TransportError::Status`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Failure reading a local file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        assert_eq!(TransportError::Status(500).to_string(), "unexpected status 500");
        assert_eq!(TransportError::Timeout.to_string(), "request timed out");
        assert_eq!(TransportError::Status(404).status_code(), Some(404));
        assert_eq!(TransportError::Timeout.status_code(), None);
    }

    #[test]
    fn test_read_error_display_mentions_path() {
        let err = ReadError::NotFound(PathBuf::from("/tmp/missing.txt"));
        assert!(err.to_string().contains("/tmp/missing.txt"));
    }
}
