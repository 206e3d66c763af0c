//! Saves downloads into a directory without overwriting existing files.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use ec_core::ports::DownloadSinkPort;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

const FALLBACK_NAME: &str = "download";
const MAX_SUFFIX: u32 = 10_000;

pub struct DownloadDirectory {
    dir: PathBuf,
}

impl DownloadDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Keeps only the final path component of a server-supplied name, so a
/// name can never escape the download directory.
pub fn sanitize_file_name(name: &str) -> String {
    match name.rsplit(|c| c == '/' || c == '\\').next().map(str::trim) {
        Some(last) if !last.is_empty() && last != "." && last != ".." => last.to_string(),
        _ => FALLBACK_NAME.to_string(),
    }
}

/// `report.pdf` → `report_<n>.pdf`; `archive` → `archive_<n>`.
fn numbered(name: &str, n: u32) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{n}.{ext}"),
        _ => format!("{name}_{n}"),
    }
}

#[async_trait]
impl DownloadSinkPort for DownloadDirectory {
    async fn save(&self, suggested_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let name = sanitize_file_name(suggested_name);
        for n in 0..MAX_SUFFIX {
            let candidate = match n {
                0 => self.dir.join(&name),
                n => self.dir.join(numbered(&name, n)),
            };

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!(path = %candidate.display(), "name taken, trying next");
                    continue;
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("failed to create {}", candidate.display()))
                }
            };

            file.write_all(bytes)
                .await
                .with_context(|| format!("failed to write {}", candidate.display()))?;
            file.flush().await?;

            info!(path = %candidate.display(), bytes = bytes.len(), "download written");
            return Ok(candidate);
        }

        bail!("no free file name for {name} in {}", self.dir.display())
    }
}
