//! Tests for [`UploadRequest`] payload construction.

use std::path::PathBuf;

use crate::clipboard::*;
use serde_json::json;

#[test]
fn test_text_upload_payload_shape() {
    let request = UploadRequest::text("hello");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "text",
            "content": "hello",
            "metadata": { "length": 5 }
        })
    );
}

#[test]
fn test_text_upload_length_counts_characters() {
    let request = UploadRequest::text("héllo 世界");
    assert_eq!(request.metadata.get_u64(meta_keys::LENGTH), Some(8));
}

#[test]
fn test_file_upload_payload_shape() {
    let file = SelectedFile {
        name: "notes.txt".to_string(),
        original_path: PathBuf::from("/home/me/notes.txt"),
        bytes: b"hello world".to_vec(),
        mime_type: Some("text/plain".to_string()),
    };

    let value = serde_json::to_value(UploadRequest::file(&file)).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "file",
            "content": "aGVsbG8gd29ybGQ=",
            "metadata": {
                "filename": "notes.txt",
                "original_path": "/home/me/notes.txt",
                "size": 11,
                "mime_type": "text/plain"
            }
        })
    );
}

#[test]
fn test_file_upload_defaults_mime_type() {
    let file = SelectedFile {
        name: "blob".to_string(),
        original_path: PathBuf::from("/tmp/blob"),
        bytes: vec![0, 1, 2],
        mime_type: None,
    };

    let request = UploadRequest::file(&file);
    assert_eq!(
        request.metadata.get_str(meta_keys::MIME_TYPE),
        Some(DEFAULT_MIME_TYPE)
    );
}

#[test]
fn test_upload_receipt_tolerates_unknown_fields() {
    let receipt: UploadReceipt = serde_json::from_value(json!({
        "status": "success",
        "type": "text",
        "size": 5,
        "timestamp": "2025-01-15T10:30:45",
        "extra": true
    }))
    .unwrap();
    assert_eq!(receipt.status.as_deref(), Some("success"));
    assert_eq!(receipt.kind, Some(ContentKind::Text));

    let empty: UploadReceipt = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, UploadReceipt::default());
}

#[test]
fn test_image_upload_payload_shape() {
    let image = PngImage {
        png: b"\x89PNG".to_vec(),
        width: 800,
        height: 600,
    };

    let value = serde_json::to_value(UploadRequest::image(&image)).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "image",
            "content": "iVBORw==",
            "metadata": {
                "format": "PNG",
                "size": 4,
                "dimensions": "800x600"
            }
        })
    );
}
