//! View logic: the content renderer and its formatting helpers.
mod format;
mod render;

pub use format::{
    format_file_size, format_local_time, format_timestamp, format_timestamp_in, needs_truncation,
    truncate_text, TEXT_PREVIEW_LIMIT,
};
pub use render::{
    render, render_info_bar, ContentView, FileView, ImageView, InfoBar, TextView, EMPTY_HINT,
    EMPTY_TITLE, UNKNOWN_CONTENT,
};
