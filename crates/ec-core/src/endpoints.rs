//! Endpoint addresses of the clipboard service, derived from one base URL.

use thiserror::Error;
use url::Url;

const STATUS: &str = "status";
const UPLOAD: &str = "upload";
const DOWNLOAD_FILE: &str = "download/file";
const DOWNLOAD_IMAGE: &str = "download/image";
const CLEAR: &str = "clear";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("invalid service address: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported scheme `{0}`, expected http or https")]
    UnsupportedScheme(String),
}

/// Resolved service endpoints.
///
/// The base may carry a path prefix (`http://host/easycopy`); endpoints are
/// resolved beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn parse(base: &str) -> Result<Self, EndpointError> {
        let mut base = Url::parse(base.trim())?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(EndpointError::UnsupportedScheme(base.scheme().to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn status(&self) -> Url {
        self.resolve(STATUS)
    }

    pub fn upload(&self) -> Url {
        self.resolve(UPLOAD)
    }

    pub fn download_file(&self) -> Url {
        self.resolve(DOWNLOAD_FILE)
    }

    pub fn download_image(&self) -> Url {
        self.resolve(DOWNLOAD_IMAGE)
    }

    pub fn clear(&self) -> Url {
        self.resolve(CLEAR)
    }

    fn resolve(&self, path: &str) -> Url {
        // Joining a scheme-less relative path onto an http(s) base cannot fail.
        self.base.join(path).unwrap_or_else(|_| self.base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_plain_host() {
        let endpoints = Endpoints::parse("http://localhost:8000").unwrap();
        assert_eq!(endpoints.status().as_str(), "http://localhost:8000/status");
        assert_eq!(endpoints.upload().as_str(), "http://localhost:8000/upload");
        assert_eq!(
            endpoints.download_file().as_str(),
            "http://localhost:8000/download/file"
        );
        assert_eq!(
            endpoints.download_image().as_str(),
            "http://localhost:8000/download/image"
        );
        assert_eq!(endpoints.clear().as_str(), "http://localhost:8000/clear");
    }

    #[test]
    fn test_endpoints_keep_path_prefix() {
        let endpoints = Endpoints::parse("https://example.com/easycopy").unwrap();
        assert_eq!(
            endpoints.status().as_str(),
            "https://example.com/easycopy/status"
        );

        let trailing = Endpoints::parse("https://example.com/easycopy/").unwrap();
        assert_eq!(trailing, endpoints);
    }

    #[test]
    fn test_endpoints_reject_non_http_addresses() {
        assert!(matches!(
            Endpoints::parse("localhost:8000"),
            Err(EndpointError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Endpoints::parse("ftp://example.com"),
            Err(EndpointError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Endpoints::parse("not a url"),
            Err(EndpointError::InvalidUrl(_))
        ));
    }
}
