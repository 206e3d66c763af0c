mod clipboard;
mod clock;
mod download_dir;
mod file_source;
mod notifier;

pub use clipboard::ArboardClipboard;
pub use clock::SystemClock;
pub use download_dir::{sanitize_file_name, DownloadDirectory};
pub use file_source::FsFileSource;
pub use notifier::TerminalNotifier;
