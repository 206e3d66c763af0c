use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system config directory unavailable")]
    ConfigDirUnavailable,

    #[error("system data-local directory unavailable")]
    DataLocalDirUnavailable,

    #[error("system download directory unavailable")]
    DownloadDirUnavailable,
}
