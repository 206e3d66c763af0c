use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "easycopy")]
#[command(version, about = "Terminal client for the EasyCopy clipboard sync service", long_about = None)]
pub struct Cli {
    /// Config file (default: <config-dir>/easycopy/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Service base address, e.g. http://localhost:8000
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Directory downloads are saved into (env: EASYCOPY_DOWNLOAD_DIR)
    #[arg(long, global = true)]
    pub download_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Interactive view with auto-refresh
    Watch {
        /// Start with auto-refresh disabled
        #[arg(long)]
        no_auto_refresh: bool,
    },
    /// Poll once and print the view
    Status {
        /// Show long text in full
        #[arg(short, long)]
        expand: bool,
    },
    /// Copy current content (text, or the image URL) to the system clipboard
    Copy,
    /// Download the current file or image
    Download,
    /// Upload TEXT, or stdin when omitted
    UploadText { text: Option<String> },
    /// Upload a file
    UploadFile { path: PathBuf },
    /// Upload the text or image on the local system clipboard
    UploadClipboard,
    /// Clear the remote clipboard
    Clear,
}

/// Settings the command line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub download_dir: Option<PathBuf>,
    pub auto_refresh: Option<bool>,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            server: self.server.clone(),
            download_dir: self.download_dir.clone(),
            auto_refresh: match self.command {
                Commands::Watch {
                    no_auto_refresh: true,
                } => Some(false),
                _ => None,
            },
        }
    }
}
