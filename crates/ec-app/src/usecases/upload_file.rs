use std::path::Path;
use std::sync::Arc;

use ec_core::ports::{ClipboardServicePort, FileSourcePort};
use ec_core::{UploadReceipt, UploadRequest};
use tracing::{info, info_span, warn, Instrument};

use crate::errors::ActionError;

/// Read a local file and replace the remote clipboard with it.
pub struct UploadFile {
    service: Arc<dyn ClipboardServicePort>,
    files: Arc<dyn FileSourcePort>,
}

impl UploadFile {
    pub fn new(service: Arc<dyn ClipboardServicePort>, files: Arc<dyn FileSourcePort>) -> Self {
        Self { service, files }
    }

    #[tracing::instrument(
        name = "usecase.upload_file.execute",
        skip(self, path),
        fields(path = %path.display())
    )]
    pub async fn execute(&self, path: &Path) -> Result<UploadReceipt, ActionError> {
        let file = self.files.read_file(path).await.map_err(|e| {
            warn!(error = %e, "failed to read file for upload");
            ActionError::Read(e)
        })?;

        let request = UploadRequest::file(&file);
        let receipt = self
            .service
            .upload(request)
            .instrument(info_span!("upload", filename = %file.name, bytes = file.size()))
            .await?;

        info!(filename = %file.name, bytes = file.size(), "file uploaded");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{MockFiles, MockService};
    use ec_core::clipboard::meta_keys;
    use ec_core::{ContentKind, ReadError, SelectedFile};
    use std::path::PathBuf;

    fn notes() -> SelectedFile {
        SelectedFile {
            name: "notes.txt".into(),
            original_path: PathBuf::from("/home/me/notes.txt"),
            bytes: b"hello world".to_vec(),
            mime_type: Some("text/plain".into()),
        }
    }

    #[tokio::test]
    async fn uploads_base64_payload_with_metadata() {
        let mut files = MockFiles::new();
        files.expect_read_file().returning(|_| Ok(notes()));
        let mut service = MockService::new();
        service
            .expect_upload()
            .withf(|req| {
                req.kind == ContentKind::File
                    && req.content == "aGVsbG8gd29ybGQ="
                    && req.metadata.get_str(meta_keys::FILENAME) == Some("notes.txt")
                    && req.metadata.get_u64(meta_keys::SIZE) == Some(11)
                    && req.metadata.get_str(meta_keys::MIME_TYPE) == Some("text/plain")
            })
            .times(1)
            .returning(|_| Ok(UploadReceipt::default()));

        let uc = UploadFile::new(Arc::new(service), Arc::new(files));
        assert!(uc.execute(Path::new("/home/me/notes.txt")).await.is_ok());
    }

    #[tokio::test]
    async fn read_failure_sends_nothing() {
        let mut files = MockFiles::new();
        files
            .expect_read_file()
            .returning(|path| Err(ReadError::NotFound(path.to_path_buf())));
        let mut service = MockService::new();
        service.expect_upload().never();

        let uc = UploadFile::new(Arc::new(service), Arc::new(files));
        let err = uc.execute(Path::new("/missing")).await.unwrap_err();

        assert_eq!(err, ActionError::Read(ReadError::NotFound(PathBuf::from("/missing"))));
    }
}
