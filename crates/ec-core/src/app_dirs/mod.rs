use std::path::PathBuf;

/// Platform directories the client reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub download_dir: PathBuf,
}

impl AppDirs {
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(crate::config::defaults::CONFIG_FILE_NAME)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
