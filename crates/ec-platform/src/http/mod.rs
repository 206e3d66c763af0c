mod errors;
mod service;

pub use errors::map_reqwest_error;
pub use service::HttpClipboardService;
