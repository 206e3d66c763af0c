//! EasyCopy terminal client.
//!
//! The binary is a thin wrapper around [`run`]; everything else lives in
//! the workspace crates (`ec-core`, `ec-app`, `ec-platform`).

use std::process::ExitCode;

use anyhow::Context;
use ec_core::app_dirs::AppDirs;
use ec_core::ports::AppDirsPort;
use ec_platform::DirsAppDirsAdapter;
use tracing::info;

pub mod bootstrap;
pub mod cli;
pub mod shell;

use bootstrap::{
    init_tracing_subscriber, load_config, load_config_if_present, wire_controller,
    ClientSettings, EnvOverrides,
};
use cli::{Cli, Commands};
use shell::commands;

/// Resolve directories, initialise tracing, then [`execute`] the command.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;

    if let Err(err) = init_tracing_subscriber(Some(&app_dirs.logs_dir())) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    execute(cli, &app_dirs).await
}

/// Load config, wire the controller and dispatch `cli.command`.
///
/// An explicit `--config` that cannot be read is an error; the default
/// config file is optional.
pub async fn execute(cli: Cli, app_dirs: &AppDirs) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_config_if_present(&app_dirs.config_file())?,
    };
    let settings =
        ClientSettings::resolve(&config, &cli.overrides(), &EnvOverrides::from_env(), app_dirs)?;
    info!(server = %settings.endpoints.base(), command = ?cli.command, "easycopy starting");

    let controller = wire_controller(&settings)?;

    let code = match cli.command {
        Commands::Watch { .. } => {
            shell::run_watch(controller.clone()).await?;
            ExitCode::SUCCESS
        }
        Commands::Status { expand } => commands::status(&controller, expand).await,
        Commands::Copy => commands::copy(&controller).await,
        Commands::Download => commands::download(&controller).await,
        Commands::UploadText { text } => commands::upload_text(&controller, text).await?,
        Commands::UploadFile { path } => commands::upload_file(&controller, &path).await,
        Commands::UploadClipboard => commands::upload_clipboard(&controller).await,
        Commands::Clear => commands::clear(&controller).await,
    };

    controller.shutdown().await;
    Ok(code)
}
