use buddyterm::utils::datetime::{format_relative, format_relative_to, parse_timestamp};
use chrono::{DateTime, Utc};

fn ts(value: &str) -> DateTime<Utc> {
    parse_timestamp(value).expect("valid timestamp")
}

#[test]
fn parses_rfc3339_with_and_without_offset() {
    assert!(parse_timestamp("2026-08-01T10:00:00Z").is_some());
    assert!(parse_timestamp("2026-08-01T10:00:00+02:00").is_some());
    assert!(parse_timestamp("2026-08-01T10:00:00.123456").is_some());
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn offset_timestamps_normalize_to_utc() {
    let with_offset = ts("2026-08-01T12:00:00+02:00");
    let utc = ts("2026-08-01T10:00:00Z");
    assert_eq!(with_offset, utc);
}

#[test]
fn relative_buckets() {
    let now = ts("2026-08-07T12:00:00Z");

    assert_eq!(format_relative_to(ts("2026-08-07T11:59:30Z"), now), "just now");
    assert_eq!(format_relative_to(ts("2026-08-07T11:55:00Z"), now), "5m");
    assert_eq!(format_relative_to(ts("2026-08-07T10:00:00Z"), now), "2h");
    assert_eq!(format_relative_to(ts("2026-08-04T12:00:00Z"), now), "3d");
    // Older than a week in the same year: month + day
    assert_eq!(format_relative_to(ts("2026-07-01T12:00:00Z"), now), "Jul 01");
    // Different year keeps the year
    assert_eq!(format_relative_to(ts("2025-12-31T12:00:00Z"), now), "Dec 31, 2025");
}

#[test]
fn unparseable_timestamps_fall_back_to_the_raw_string() {
    assert_eq!(format_relative("three days ago"), "three days ago");
}
