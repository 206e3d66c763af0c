//! One-shot commands: poll once, act, report through the notifier, exit.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use ec_app::{ClipboardController, ViewState};
use tokio::io::AsyncReadExt;
use tracing::warn;

use super::screen::render_screen;

fn exit_code<T, E>(result: &Result<T, E>) -> ExitCode {
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Prints the current view. Fails when the poll failed.
pub async fn status(controller: &ClipboardController, expand: bool) -> ExitCode {
    controller.refresh().await;
    if expand {
        controller.toggle_text_expanded().await;
    }

    let state = controller.state().await;
    let view = state.content_view(&controller.image_url());
    print!("{}", render_screen(&state, &view));

    if state.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Copies the freshly polled content. A failed poll is reported as such
/// instead of acting on stale or missing content.
pub async fn copy(controller: &ClipboardController) -> ExitCode {
    if let Some(code) = refresh_or_fail(controller, "copy").await {
        return code;
    }
    exit_code(&controller.copy_content().await)
}

pub async fn download(controller: &ClipboardController) -> ExitCode {
    if let Some(code) = refresh_or_fail(controller, "download").await {
        return code;
    }
    exit_code(&controller.download().await)
}

/// Uploads `text`, or everything on stdin when `None`.
pub async fn upload_text(
    controller: &ClipboardController,
    text: Option<String>,
) -> anyhow::Result<ExitCode> {
    let text = match text {
        Some(text) => text,
        None => read_stdin().await?,
    };
    controller.set_upload_text(text).await;
    Ok(exit_code(&controller.submit_upload_text().await))
}

pub async fn upload_file(controller: &ClipboardController, path: &Path) -> ExitCode {
    exit_code(&controller.upload_file(path).await)
}

pub async fn upload_clipboard(controller: &ClipboardController) -> ExitCode {
    exit_code(&controller.upload_clipboard().await)
}

pub async fn clear(controller: &ClipboardController) -> ExitCode {
    exit_code(&controller.clear().await)
}

async fn refresh_or_fail(controller: &ClipboardController, action: &str) -> Option<ExitCode> {
    controller.refresh().await;
    let message = poll_failure_message(action, &controller.state().await)?;
    warn!(action, "status poll failed before one-shot action");
    eprintln!("{message}");
    Some(ExitCode::FAILURE)
}

fn poll_failure_message(action: &str, state: &ViewState) -> Option<String> {
    state
        .error
        .as_ref()
        .map(|error| format!("Cannot {action}: {error}"))
}

async fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("Failed to read text from stdin")?;
    Ok(strip_trailing_newline(buf))
}

/// Drops the single line break a shell pipe appends.
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
