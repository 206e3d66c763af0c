//! # Configuration Loader
//!
//! Two steps, kept apart:
//!
//! 1. [`load_config`] reads the TOML file into the pure
//!    [`AppConfig`] DTO. No validation, no defaults.
//! 2. [`ClientSettings::resolve`] merges command line, environment, file
//!    and defaults into the effective settings, and validates the service
//!    address.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use ec_core::app_dirs::AppDirs;
use ec_core::config::defaults::{
    DEFAULT_AUTO_REFRESH, DEFAULT_POLL_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVER_URL, DOWNLOAD_DIR_ENV, SERVER_URL_ENV,
};
use ec_core::{AppConfig, Endpoints};

use crate::cli::CliOverrides;

/// Load configuration from a TOML file
///
/// Pure data loading: empty strings and zeros are accepted as facts.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields an empty config.
pub fn load_config_if_present(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(AppConfig::empty());
    }
    load_config(config_path)
}

/// Settings taken from the environment. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `EASYCOPY_SERVER`
    pub server: Option<String>,
    /// `EASYCOPY_DOWNLOAD_DIR`
    pub download_dir: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            server: non_empty_var(SERVER_URL_ENV),
            download_dir: non_empty_var(DOWNLOAD_DIR_ENV).map(PathBuf::from),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Effective client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoints: Endpoints,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub auto_refresh: bool,
    pub download_dir: PathBuf,
}

impl ClientSettings {
    /// Server address and download directory both resolve as: command
    /// line, then environment, then the config file, then the default.
    pub fn resolve(
        config: &AppConfig,
        overrides: &CliOverrides,
        env: &EnvOverrides,
        app_dirs: &AppDirs,
    ) -> anyhow::Result<Self> {
        let server = overrides
            .server
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| env.server.clone().filter(|s| !s.trim().is_empty()))
            .or_else(|| Some(config.server_url.clone()).filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let endpoints = Endpoints::parse(&server)
            .with_context(|| format!("Invalid server address: {server}"))?;

        let poll_interval_ms = match config.poll_interval_ms {
            0 => DEFAULT_POLL_INTERVAL_MS,
            ms => ms,
        };
        let request_timeout_secs = match config.request_timeout_secs {
            0 => DEFAULT_REQUEST_TIMEOUT_SECS,
            secs => secs,
        };
        let download_dir = overrides
            .download_dir
            .clone()
            .or_else(|| env.download_dir.clone())
            .or_else(|| {
                Some(config.download_dir.clone()).filter(|dir| !dir.as_os_str().is_empty())
            })
            .unwrap_or_else(|| app_dirs.download_dir.clone());

        Ok(Self {
            endpoints,
            poll_interval: Duration::from_millis(poll_interval_ms),
            request_timeout: Duration::from_secs(request_timeout_secs),
            auto_refresh: overrides
                .auto_refresh
                .or(config.auto_refresh)
                .unwrap_or(DEFAULT_AUTO_REFRESH),
            download_dir,
        })
    }
}
