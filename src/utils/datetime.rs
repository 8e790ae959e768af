//! Date and time utility functions
//!
//! This module provides functions for parsing API timestamps and formatting
//! them the way social feeds display them (e.g., "just now", "5m", "2h").

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

/// Timestamp format used by the API when no timezone offset is present
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an API timestamp string into a UTC datetime.
///
/// The server emits ISO-8601 timestamps, usually with a `Z` suffix or an
/// explicit offset; timestamps without an offset are assumed to be UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, NAIVE_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format an API timestamp in feed-style relative form.
///
/// Falls back to the raw string when the timestamp cannot be parsed.
pub fn format_relative(value: &str) -> String {
    match parse_timestamp(value) {
        Some(ts) => format_relative_to(ts, Utc::now()),
        None => value.to_string(),
    }
}

/// Format a timestamp relative to a reference instant.
///
/// # Arguments
/// * `ts` - The timestamp to format
/// * `now` - The reference instant (injected so tests are deterministic)
pub fn format_relative_to(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(ts);
    let seconds = elapsed.num_seconds();

    if seconds < 45 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{}m", minutes.max(1));
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{}d", days);
    }

    // For older posts, show the actual date
    // Format as "Jan 15" or "Jan 15, 2025" if different year
    if ts.year() == now.year() {
        ts.format("%b %d").to_string()
    } else {
        ts.format("%b %d, %Y").to_string()
    }
}
