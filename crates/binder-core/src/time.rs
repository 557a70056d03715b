//! Timestamp parsing for overdue marking.
//!
//! The server renders instants as RFC 3339 (`2024-01-10T10:00:00Z`). Naive
//! `datetime-local` style values are accepted too and read as UTC, which
//! keeps comparisons between two naive values consistent.

use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a timestamp attribute into an instant.
///
/// Returns `None` for empty or unparseable input.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Whether `submitted` falls strictly after `due`.
///
/// `None` when either side fails to parse, so callers skip the marking.
pub fn is_after(submitted: &str, due: &str) -> Option<bool> {
    let due = parse_instant(due)?;
    let submitted = parse_instant(submitted)?;
    Some(submitted > due)
}
