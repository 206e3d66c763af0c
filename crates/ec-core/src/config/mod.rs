//! # Pure Data Module - Configuration DTO
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No default value calculation** (see [`defaults`], applied by the bootstrap layer)
//!
//! > **This module contains data only.** Missing values map to empty facts
//! > (`""`, `0`, `None`), never to errors.

pub mod defaults;

use std::path::PathBuf;

/// Client configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base address of the clipboard service (may be empty)
    pub server_url: String,

    /// Per-request deadline in seconds (0 = unset)
    pub request_timeout_secs: u64,

    /// Auto-refresh interval in milliseconds (0 = unset)
    pub poll_interval_ms: u64,

    /// Whether polling starts enabled (`None` = unset)
    pub auto_refresh: Option<bool>,

    /// Where downloads are saved (path info only, no existence check)
    pub download_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from a TOML value
    ///
    /// **Prohibited**: no validation or default value logic here.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            server_url: toml_value
                .get("server")
                .and_then(|s| s.get("url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: toml_value
                .get("server")
                .and_then(|s| s.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            poll_interval_ms: toml_value
                .get("sync")
                .and_then(|s| s.get("poll_interval_ms"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            auto_refresh: toml_value
                .get("sync")
                .and_then(|s| s.get("auto_refresh"))
                .and_then(|v| v.as_bool()),
            download_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("download_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/unset values)
    pub fn empty() -> Self {
        Self {
            server_url: String::new(),
            request_timeout_secs: 0,
            poll_interval_ms: 0,
            auto_refresh: None,
            download_dir: PathBuf::new(),
        }
    }
}
