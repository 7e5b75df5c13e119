use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse the backend's creation timestamp. Accepts RFC 3339 with an offset,
/// a zone-less local date-time, or a bare date.
pub fn parse_created_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.date_naive());
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(local.date());
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(local.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format a creation timestamp for the payments table, e.g. "3/5/2024".
/// Unparseable input is shown as-is.
pub fn format_created_at(raw: &str) -> String {
    match parse_created_at(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}
