//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a timestamp as the content API emits it.
///
/// Accepts RFC 3339 (`2024-01-15T10:30:00Z`), offset-less ISO timestamps
/// with optional fractional seconds (`2024-01-15T10:30:00.1234567`) and bare
/// dates. Timestamps carrying an offset keep their own wall-clock date.
pub fn parse_api_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format date in full format (like "January 5, 2024").
///
/// Unparsable input is returned untouched.
pub fn long_date(raw: &str) -> String {
    format_or_raw(raw, "%B %-d, %Y")
}

/// Format date with an abbreviated month (like "Jan 5, 2024")
pub fn short_date(raw: &str) -> String {
    format_or_raw(raw, "%b %-d, %Y")
}

/// Machine-readable value for a `<time datetime="...">` attribute
pub fn datetime_attr(raw: &str) -> String {
    parse_api_date(raw)
        .map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

fn format_or_raw(raw: &str, format: &str) -> String {
    match parse_api_date(raw) {
        Some(date) => date.format(format).to_string(),
        None => {
            tracing::debug!("Unparsable date {:?}", raw);
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        assert_eq!(long_date("2024-01-05T10:30:00"), "January 5, 2024");
        assert_eq!(long_date("2024-11-20T23:59:59.1234567"), "November 20, 2024");
        assert_eq!(long_date("2023-05-30"), "May 30, 2023");
    }

    #[test]
    fn test_long_date_with_offset() {
        assert_eq!(long_date("2024-02-29T08:00:00Z"), "February 29, 2024");
        assert_eq!(long_date("2024-02-29T23:00:00+04:00"), "February 29, 2024");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-09-03T12:00:00"), "Sep 3, 2024");
    }

    #[test]
    fn test_unparsable_date_passes_through() {
        assert_eq!(long_date("someday"), "someday");
    }

    #[test]
    fn test_datetime_attr() {
        assert_eq!(datetime_attr("2024-01-05"), "2024-01-05T00:00:00");
    }
}
