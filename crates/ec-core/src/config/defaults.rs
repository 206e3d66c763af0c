//! Default values applied when configuration leaves a setting unset.

/// Service address used when neither flag, environment nor file set one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Environment variable overriding the service address.
pub const SERVER_URL_ENV: &str = "EASYCOPY_SERVER";

/// Environment variable overriding the download directory.
pub const DOWNLOAD_DIR_ENV: &str = "EASYCOPY_DOWNLOAD_DIR";

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_AUTO_REFRESH: bool = true;

/// Directory name used beneath the platform downloads/config/data dirs.
pub const APP_DIR_NAME: &str = "easycopy";

pub const CONFIG_FILE_NAME: &str = "config.toml";
