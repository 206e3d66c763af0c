//! Tests for [`StatusResponse`], [`ClipboardSnapshot`], [`ContentKind`] and
//! [`Metadata`].

use crate::clipboard::*;
use serde_json::json;

#[test]
fn test_status_without_data_yields_no_snapshot() {
    let status: StatusResponse = serde_json::from_value(json!({ "has_data": false })).unwrap();
    assert!(status.into_snapshot().is_none());
}

#[test]
fn test_status_without_data_ignores_other_fields() {
    let status: StatusResponse = serde_json::from_value(json!({
        "has_data": false,
        "type": "text",
        "content": "leftover",
        "metadata": { "length": 8 }
    }))
    .unwrap();
    assert!(status.into_snapshot().is_none());
}

#[test]
fn test_status_with_text_data() {
    let status: StatusResponse = serde_json::from_value(json!({
        "has_data": true,
        "type": "text",
        "content": "hello",
        "size": 5,
        "metadata": { "length": 5 },
        "timestamp": "2025-01-15T10:30:45.123456"
    }))
    .unwrap();

    let snapshot = status.into_snapshot().expect("snapshot expected");
    assert_eq!(snapshot.kind, ContentKind::Text);
    assert_eq!(snapshot.text(), "hello");
    assert_eq!(snapshot.metadata.get_u64(meta_keys::LENGTH), Some(5));
    assert_eq!(snapshot.timestamp.as_deref(), Some("2025-01-15T10:30:45.123456"));
}

#[test]
fn test_status_with_missing_metadata_defaults_to_empty() {
    let status: StatusResponse =
        serde_json::from_value(json!({ "has_data": true, "type": "file" })).unwrap();
    let snapshot = status.into_snapshot().unwrap();
    assert!(snapshot.metadata.is_empty());
    assert!(snapshot.content.is_none());
}

#[test]
fn test_unknown_kind_is_preserved() {
    let status: StatusResponse =
        serde_json::from_value(json!({ "has_data": true, "type": "video" })).unwrap();
    let snapshot = status.into_snapshot().unwrap();
    assert_eq!(snapshot.kind, ContentKind::Other("video".to_string()));
    assert_eq!(snapshot.kind.to_string(), "video");
}

#[test]
fn test_content_kind_serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_string(&ContentKind::Image).unwrap(), "\"image\"");
    let kind: ContentKind = serde_json::from_str("\"file\"").unwrap();
    assert_eq!(kind, ContentKind::File);
}

#[test]
fn test_metadata_u64_accepts_numbers_floats_and_numeric_strings() {
    let metadata: Metadata = serde_json::from_value(json!({
        "a": 2048,
        "b": 1536.9,
        "c": "42",
        "d": -3,
        "e": "big",
        "f": null
    }))
    .unwrap();

    assert_eq!(metadata.get_u64("a"), Some(2048));
    assert_eq!(metadata.get_u64("b"), Some(1536));
    assert_eq!(metadata.get_u64("c"), Some(42));
    assert_eq!(metadata.get_u64("d"), None);
    assert_eq!(metadata.get_u64("e"), None);
    assert_eq!(metadata.get_u64("f"), None);
    assert_eq!(metadata.get_u64("missing"), None);
}

#[test]
fn test_metadata_empty_string_reads_as_absent() {
    let metadata = Metadata::new().with(meta_keys::FILENAME, "");
    assert_eq!(metadata.get_str(meta_keys::FILENAME), None);
    assert_eq!(metadata.display(meta_keys::FILENAME), None);
}

#[test]
fn test_snapshot_differs_on_timestamp_change() {
    let a = ClipboardSnapshot {
        kind: ContentKind::Text,
        content: Some("same".into()),
        metadata: Metadata::default(),
        timestamp: Some("2025-01-01T00:00:00".into()),
    };
    let mut b = a.clone();
    assert!(!a.differs_from(&b));

    b.timestamp = Some("2025-01-01T00:00:01".into());
    assert!(a.differs_from(&b));
}

#[test]
fn test_download_names_follow_metadata() {
    let file = ClipboardSnapshot {
        kind: ContentKind::File,
        content: None,
        metadata: Metadata::new().with(meta_keys::FILENAME, "report.pdf"),
        timestamp: None,
    };
    assert_eq!(file.download_file_name(), "report.pdf");

    let image = ClipboardSnapshot {
        kind: ContentKind::Image,
        content: None,
        metadata: Metadata::new().with(meta_keys::FORMAT, "JPEG"),
        timestamp: None,
    };
    assert_eq!(image.download_image_name(), "clipboard_image.jpeg");

    let bare = ClipboardSnapshot {
        kind: ContentKind::Image,
        content: None,
        metadata: Metadata::default(),
        timestamp: None,
    };
    assert_eq!(bare.download_image_name(), "clipboard_image.png");
    assert_eq!(bare.download_file_name(), "download");
}
