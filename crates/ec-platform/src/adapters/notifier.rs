use std::io::Write;

use ec_core::ports::NotifierPort;
use ec_core::{Notice, NoticeLevel};
use tracing::{info, warn};

/// Prints notices to stdout, one line each.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl NotifierPort for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => info!(message = %notice.message, "notice"),
            NoticeLevel::Failure => warn!(message = %notice.message, "notice"),
        }
        let mut stdout = std::io::stdout().lock();
        // A closed stdout leaves nothing to report to.
        let _ = writeln!(stdout, "{notice}");
        let _ = stdout.flush();
    }
}
