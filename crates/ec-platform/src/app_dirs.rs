use std::path::PathBuf;

use ec_core::{
    app_dirs::AppDirs,
    config::defaults::APP_DIR_NAME,
    ports::{AppDirsError, AppDirsPort},
};

pub struct DirsAppDirsAdapter {
    base_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// Creates an adapter resolving the platform's standard directories.
    ///
    /// # Examples
    ///
    /// ```
    /// use ec_platform::app_dirs::DirsAppDirsAdapter;
    /// let _ = DirsAppDirsAdapter::new();
    /// ```
    pub fn new() -> Self {
        Self {
            base_dir_override: None,
        }
    }

    /// Test-only adapter that resolves every directory beneath `base`.
    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_dir_override: Some(base),
        }
    }

    fn resolve(&self, system: fn() -> Option<PathBuf>, sub: &str) -> Option<PathBuf> {
        match &self.base_dir_override {
            Some(base) => Some(base.join(sub)),
            None => system(),
        }
    }

    fn downloads_base() -> Option<PathBuf> {
        dirs::download_dir().or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let config = self
            .resolve(dirs::config_dir, "config")
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let data = self
            .resolve(dirs::data_local_dir, "data")
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let downloads = self
            .resolve(Self::downloads_base, "downloads")
            .ok_or(AppDirsError::DownloadDirUnavailable)?;

        Ok(AppDirs {
            config_dir: config.join(APP_DIR_NAME),
            data_dir: data.join(APP_DIR_NAME),
            download_dir: downloads.join(APP_DIR_NAME),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_appends_easycopy_dir_name() {
        let adapter = DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp/base"));
        let dirs = adapter.get_app_dirs().unwrap();

        assert_eq!(dirs.config_dir, PathBuf::from("/tmp/base/config/easycopy"));
        assert_eq!(dirs.data_dir, PathBuf::from("/tmp/base/data/easycopy"));
        assert_eq!(
            dirs.download_dir,
            PathBuf::from("/tmp/base/downloads/easycopy")
        );
        assert_eq!(
            dirs.config_file(),
            PathBuf::from("/tmp/base/config/easycopy/config.toml")
        );
    }
}
