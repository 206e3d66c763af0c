//! # ec-app
//!
//! Application layer of the EasyCopy client: the explicit view state, one use
//! case per user action, and the [`ClipboardController`] that sequences polls,
//! guards uploads and drives the auto-refresh timer.

pub mod auto_refresh;
pub mod controller;
pub mod deps;
pub mod errors;
pub mod state;
pub mod usecases;

pub use controller::{ClipboardController, ControllerSettings};
pub use deps::ControllerDeps;
pub use errors::ActionError;
pub use state::{UploadKind, UploadOutcome, UploadPhase, ViewState};
