//! Display formatting helpers shared by every renderer.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Number of characters of text shown before the preview is truncated.
pub const TEXT_PREVIEW_LIMIT: usize = 300;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable byte size with base 1024 and exactly two decimals.
///
/// ```
/// use ec_core::view::format_file_size;
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.50 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

/// Formats a server timestamp in the local time zone.
///
/// Returns `"Unknown"` for absent or empty input.
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Same as [`format_timestamp`] with an explicit target time zone.
///
/// RFC 3339 input keeps its offset; offset-less ISO-8601 input is read as
/// UTC, which is what the service emits. Unparseable input is returned
/// verbatim.
pub fn format_timestamp_in<Tz>(timestamp: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let raw = match timestamp.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return "Unknown".to_string(),
    };

    match parse_timestamp(raw) {
        Some(utc) => utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Formats an epoch-millisecond instant as a local wall-clock time.
pub fn format_local_time(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => "Unknown".to_string(),
    }
}

/// Text shown in the preview: the full text when it fits or when expanded,
/// otherwise the first [`TEXT_PREVIEW_LIMIT`] characters plus `...`.
pub fn truncate_text(text: &str, expanded: bool) -> String {
    if expanded || !needs_truncation(text) {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(TEXT_PREVIEW_LIMIT).collect();
    preview.push_str("...");
    preview
}

/// Whether `text` is longer than the preview limit.
pub fn needs_truncation(text: &str) -> bool {
    text.chars().nth(TEXT_PREVIEW_LIMIT).is_some()
}
