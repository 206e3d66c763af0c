use ec_core::{ReadError, TransportError};
use thiserror::Error;

/// Failure of a user-triggered action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("Please enter some text to upload")]
    EmptyText,

    #[error("An upload is already in progress")]
    UploadInProgress,

    #[error("No content found in clipboard")]
    ClipboardEmpty,

    #[error("nothing to {0}")]
    NoContent(&'static str),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to save download: {0}")]
    Save(String),
}

impl ActionError {
    /// Whether the action was refused before anything was sent.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ActionError::EmptyText
                | ActionError::UploadInProgress
                | ActionError::ClipboardEmpty
                | ActionError::NoContent(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_display_transparently() {
        let err: ActionError = TransportError::Status(500).into();
        assert_eq!(err.to_string(), "unexpected status 500");
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_rejections() {
        assert!(ActionError::EmptyText.is_rejection());
        assert!(ActionError::UploadInProgress.is_rejection());
        assert!(ActionError::NoContent("download").is_rejection());
        assert!(ActionError::ClipboardEmpty.is_rejection());
        assert!(!ActionError::Clipboard("no display".into()).is_rejection());
        assert_eq!(
            ActionError::EmptyText.to_string(),
            "Please enter some text to upload"
        );
    }
}
