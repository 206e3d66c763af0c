use crate::notice::Notice;

/// Surfaces a notice to the user (dialog, terminal line, toast).
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notice: &Notice);
}
