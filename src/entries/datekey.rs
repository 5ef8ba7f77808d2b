//! Day-key normalization
//!
//! Date cells come back from the sheet in whatever shape the user (or Apps
//! Script) wrote them: ISO timestamps, plain `YYYY-MM-DD`, locale formats.
//! Everything date-grouped in the app keys off the canonical `YYYY-MM-DD`
//! string this module produces.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Fallback formats seen in spreadsheet exports.
const LOOSE_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y", "%Y.%m.%d", "%B %d, %Y", "%b %d, %Y"];

/// Normalize a raw date cell to a `YYYY-MM-DD` day key.
///
/// Total: unparseable input yields `None`, which excludes the entry from
/// date-based views without surfacing an error. The branch order matters:
/// a string containing `T` is only ever treated as an ISO timestamp, even
/// if it happens to start with a valid `YYYY-MM-DD` prefix.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains('T') {
        return parse_iso(trimmed).map(format_key);
    }

    // A valid-looking prefix is taken verbatim, with no range validation.
    // The sheet has rows like "2024-05-01 (monday class)" that must keep
    // grouping under 2024-05-01.
    let prefix = Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap();
    if prefix.is_match(trimmed) {
        return Some(trimmed[..10].to_string());
    }

    parse_loose(trimmed).map(format_key)
}

fn format_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse an ISO-8601 timestamp, with or without a zone offset.
fn parse_iso(raw: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.date());
        }
    }
    None
}

fn parse_loose(raw: &str) -> Option<NaiveDate> {
    for format in LOOSE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    // Apps Script date cells sometimes stringify as RFC 2822
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.date_naive());
    }
    None
}
