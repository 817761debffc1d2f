//! Timestamp utilities: the `created_at` storage format and display.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};

/// Storage form: RFC 3339, UTC, microsecond precision. Fixed width, so
/// text ordering in SQL equals chronological ordering.
pub fn to_db_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp. Naive ISO-8601 values (no offset) are
/// taken as UTC.
pub fn parse_db_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive_formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    naive_formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|n| n.and_utc())
}

/// `YYYY-MM-DD HH:MM:SS` in the operator's local time zone.
pub fn display_local(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
