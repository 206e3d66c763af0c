//! Interactive `watch` loop: redraws on state changes, reads one command
//! per line from stdin.

use std::path::PathBuf;

use ec_app::ClipboardController;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::screen::{render_screen, screen_fingerprint};

pub const HELP: &str = "\
commands:
  r           refresh now
  a           toggle auto-refresh
  e           show more / show less
  p           toggle upload panel
  c           copy content to the system clipboard
  d           download file or image
  t <text>    set the upload text
  s           send the upload text
  f <path>    upload a file
  u           upload the local system clipboard
  x           clear the remote clipboard
  h           this help
  q           quit (Ctrl-C also quits)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchCommand {
    Refresh,
    ToggleAutoRefresh,
    ToggleExpand,
    ToggleUploadPanel,
    Copy,
    Download,
    SetText(String),
    SubmitText,
    UploadFile(PathBuf),
    UploadClipboard,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("empty command, type `h` for help")]
    Empty,
    #[error("unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

pub fn parse_command(line: &str) -> Result<WatchCommand, CommandParseError> {
    let line = line.trim_start();
    let (head, raw_rest) = match line.find(char::is_whitespace) {
        Some(at) => line.split_at(at),
        None => (line, ""),
    };
    let rest = raw_rest.trim();

    let command = match head {
        "" => return Err(CommandParseError::Empty),
        "r" => WatchCommand::Refresh,
        "a" => WatchCommand::ToggleAutoRefresh,
        "e" => WatchCommand::ToggleExpand,
        "p" => WatchCommand::ToggleUploadPanel,
        "c" => WatchCommand::Copy,
        "d" => WatchCommand::Download,
        // Only the separator after `t` is dropped; whitespace-only text is
        // accepted here and rejected on submit.
        "t" => WatchCommand::SetText(strip_separator(raw_rest).to_string()),
        "s" => WatchCommand::SubmitText,
        "f" if rest.is_empty() => return Err(CommandParseError::MissingArgument("f")),
        "f" => WatchCommand::UploadFile(PathBuf::from(rest)),
        "u" => WatchCommand::UploadClipboard,
        "x" => WatchCommand::Clear,
        "h" | "?" => WatchCommand::Help,
        "q" => WatchCommand::Quit,
        other => return Err(CommandParseError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn strip_separator(rest: &str) -> &str {
    let mut chars = rest.chars();
    chars.next();
    chars.as_str()
}

/// Runs the interactive view until `q`, Ctrl-C or end of input.
///
/// The controller is started here and shut down before returning.
pub async fn run_watch(controller: ClipboardController) -> anyhow::Result<()> {
    let mut changes = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_screen = String::new();

    println!("{HELP}");
    controller.start().await;
    redraw(&controller, &mut last_screen).await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, leaving watch mode");
                break;
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                redraw(&controller, &mut last_screen).await;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed, leaving watch mode");
                    break;
                };
                match parse_command(&line) {
                    Ok(WatchCommand::Quit) => break,
                    Ok(command) => dispatch(&controller, command, &mut last_screen).await,
                    Err(CommandParseError::Empty) => {}
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    controller.shutdown().await;
    Ok(())
}

async fn dispatch(controller: &ClipboardController, command: WatchCommand, last_screen: &mut String) {
    match command {
        WatchCommand::Refresh => {
            controller.spawn_refresh();
        }
        WatchCommand::ToggleAutoRefresh => {
            controller.toggle_auto_refresh().await;
        }
        WatchCommand::ToggleExpand => {
            controller.toggle_text_expanded().await;
        }
        WatchCommand::ToggleUploadPanel => {
            controller.toggle_upload_panel().await;
        }
        WatchCommand::SetText(text) => controller.set_upload_text(text).await,
        WatchCommand::Help => {
            println!("{HELP}");
            // Force the next change to redraw below the help text.
            last_screen.clear();
        }
        WatchCommand::Quit => {}
        // Network actions run on their own task so the view keeps updating;
        // outcomes are reported through the notifier.
        WatchCommand::Copy => spawn_action(controller, |c| async move {
            c.copy_content().await.map(drop)
        }),
        WatchCommand::Download => spawn_action(controller, |c| async move {
            c.download().await.map(drop)
        }),
        WatchCommand::SubmitText => spawn_action(controller, |c| async move {
            c.submit_upload_text().await
        }),
        WatchCommand::UploadFile(path) => spawn_action(controller, move |c| async move {
            c.upload_file(&path).await
        }),
        WatchCommand::UploadClipboard => spawn_action(controller, |c| async move {
            c.upload_clipboard().await
        }),
        WatchCommand::Clear => spawn_action(controller, |c| async move { c.clear().await }),
    }
}

fn spawn_action<F, Fut>(controller: &ClipboardController, action: F)
where
    F: FnOnce(ClipboardController) -> Fut,
    Fut: std::future::Future<Output = Result<(), ec_app::ActionError>> + Send + 'static,
{
    let fut = action(controller.clone());
    tokio::spawn(async move {
        if let Err(err) = fut.await {
            debug!(error = %err, "watch action failed");
        }
    });
}

/// Repaints when anything but the refreshing marker changed.
///
/// `last_screen` holds the fingerprint of the last painted screen.
async fn redraw(controller: &ClipboardController, last_screen: &mut String) {
    let state = controller.state().await;
    let view = state.content_view(&controller.image_url());
    let fingerprint = screen_fingerprint(&state, &view);
    if fingerprint != *last_screen {
        println!();
        print!("{}", render_screen(&state, &view));
        *last_screen = fingerprint;
    }
}
