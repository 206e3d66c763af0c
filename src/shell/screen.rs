//! Plain-text rendering of the controller state for the terminal.

use std::fmt::Write as _;

use ec_app::{UploadPhase, ViewState};
use ec_core::view::{format_local_time, ContentView, EMPTY_HINT};

const RULE: &str = "----------------------------------------";

/// Render the whole screen for `state`.
///
/// `view` is the rendered content area; it is passed in so callers can
/// reuse the one they already built for copy and download.
pub fn render_screen(state: &ViewState, view: &ContentView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "EasyCopy");
    let _ = writeln!(out, "{}", status_line(state));
    if let Some(error) = &state.error {
        let _ = writeln!(out, "! {error}");
    }
    if let Some(bar) = state.info_bar() {
        let _ = writeln!(out, "Active | Type: {} | Uploaded: {}", bar.kind, bar.uploaded);
    }
    let _ = writeln!(out, "{RULE}");

    render_content(&mut out, view);

    if state.upload_panel_open {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Upload");
        if state.upload_text.is_empty() {
            let _ = writeln!(out, "  (buffer empty, use `t <text>`)");
        } else {
            for line in state.upload_text.lines() {
                let _ = writeln!(out, "  > {line}");
            }
        }
        let _ = writeln!(out, "  [s] send text  [f <path>] send file  [u] send clipboard");
    }

    out
}

/// The screen as it would look with no poll in flight.
///
/// Two states with equal fingerprints differ at most in the refreshing
/// marker, so the watch loop does not repaint for it alone.
pub fn screen_fingerprint(state: &ViewState, view: &ContentView) -> String {
    if !state.is_loading() {
        return render_screen(state, view);
    }
    let mut settled = state.clone();
    settled.in_flight_polls = 0;
    render_screen(&settled, view)
}

fn status_line(state: &ViewState) -> String {
    let mut line = format!(
        "auto-refresh: {}",
        if state.auto_refresh { "on" } else { "off" }
    );
    if let Some(updated) = state.last_updated {
        let _ = write!(line, " | last updated: {}", format_local_time(updated));
    }
    if state.is_loading() {
        line.push_str(" | refreshing...");
    }
    if let UploadPhase::Uploading(kind) = state.upload_phase {
        let _ = write!(line, " | uploading {}...", kind.label());
    }
    line
}

fn render_content(out: &mut String, view: &ContentView) {
    let _ = writeln!(out, "{}", view.title());
    match view {
        ContentView::Empty => {
            let _ = writeln!(out, "{EMPTY_HINT}");
        }
        ContentView::Unknown { kind } if !kind.is_empty() => {
            let _ = writeln!(out, "Reported type: {kind}");
        }
        _ => {}
    }
    for line in view.metadata_lines() {
        let _ = writeln!(out, "- {line}");
    }
    match view {
        ContentView::Text(text) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", text.display);
            if text.can_toggle {
                let label = if text.expanded { "Show Less" } else { "Show More" };
                let _ = writeln!(out, "[e] {label}");
            }
        }
        ContentView::Image(image) => {
            let _ = writeln!(out, "- URL: {}", image.image_url);
        }
        _ => {}
    }
}
