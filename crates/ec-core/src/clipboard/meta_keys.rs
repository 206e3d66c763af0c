//! Well-known metadata keys used by the clipboard service.

/// Character count of a text payload.
pub const LENGTH: &str = "length";
/// Image format, e.g. `PNG`.
pub const FORMAT: &str = "format";
/// Payload size in bytes.
pub const SIZE: &str = "size";
/// Image dimensions, e.g. `800x600`.
pub const DIMENSIONS: &str = "dimensions";
pub const FILENAME: &str = "filename";
pub const ORIGINAL_PATH: &str = "original_path";
pub const MIME_TYPE: &str = "mime_type";
