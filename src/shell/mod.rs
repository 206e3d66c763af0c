//! Terminal host: renders the controller state and drives it from the
//! command line or an interactive loop.

pub mod commands;
pub mod screen;
pub mod watch;

pub use screen::render_screen;
pub use watch::{parse_command, run_watch, WatchCommand};
