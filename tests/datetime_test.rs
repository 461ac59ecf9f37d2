use chrono::{NaiveDate, NaiveDateTime};
use datekit::error::DateError;
use datekit::utils::datetime::*;

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
}

#[test]
fn test_format_datetime() {
    let spec = FormatSpec::new("%Y-%m-%d %H:%M").unwrap();
    let datetime = dt(2024, 1, 15, 9, 30);
    assert_eq!(format_datetime(datetime, &spec), "2024-01-15 09:30");
}

#[test]
fn test_parse_datetime() {
    let spec = FormatSpec::new("%Y-%m-%d %H:%M").unwrap();
    let parsed = parse_datetime("2024-01-15 09:30", &spec).unwrap();
    assert_eq!(parsed, dt(2024, 1, 15, 9, 30));
}

#[test]
fn test_format_parse_round_trip() {
    let spec = FormatSpec::new("%Y-%m-%d %H:%M:%S").unwrap();
    let datetime = dt(2023, 12, 25, 23, 59);
    let text = format_datetime(datetime, &spec);
    assert_eq!(parse_datetime(&text, &spec).unwrap(), datetime);
}

#[test]
fn test_parse_datetime_empty_text() {
    let spec = FormatSpec::new("%Y-%m-%d %H:%M").unwrap();
    let err = parse_datetime("", &spec).unwrap_err();
    assert!(matches!(err, DateError::InvalidArgument(_)));

    let err = parse_datetime("   ", &spec).unwrap_err();
    assert!(matches!(err, DateError::InvalidArgument(_)));
}

#[test]
fn test_parse_datetime_mismatched_text() {
    let spec = FormatSpec::new("%Y-%m-%d %H:%M").unwrap();
    let err = parse_datetime("2024/01/15 09:30", &spec).unwrap_err();
    assert!(matches!(err, DateError::Parse(_)));
}

#[test]
fn test_format_spec_rejects_blank_pattern() {
    assert!(matches!(FormatSpec::new(""), Err(DateError::InvalidArgument(_))));
    assert!(matches!(FormatSpec::new("  "), Err(DateError::InvalidArgument(_))));
}

#[test]
fn test_format_spec_rejects_unknown_token() {
    let err = FormatSpec::new("%Y-%Q").unwrap_err();
    assert!(matches!(err, DateError::InvalidArgument(_)));
}

#[test]
fn test_format_spec_rejects_timezone_tokens() {
    // Naive date-times carry no offset, so these would panic at render time
    for pattern in ["%Y-%m-%d %Z", "%Y-%m-%d %z", "%Y-%m-%d %:z", "%+"] {
        let err = FormatSpec::new(pattern).unwrap_err();
        assert!(matches!(err, DateError::InvalidArgument(_)), "accepted {pattern}");
    }
}

#[test]
fn test_format_spec_pattern_accessor() {
    let spec = FormatSpec::new("%Y-%m-%d").unwrap();
    assert_eq!(spec.pattern(), "%Y-%m-%d");
}

#[test]
fn test_elapsed_units() {
    let start = dt(2024, 1, 1, 0, 0);
    let end = dt(2024, 1, 2, 3, 0); // 27 hours later
    assert_eq!(elapsed_minutes(start, end), 1620);
    assert_eq!(elapsed_hours(start, end), 27);
    assert_eq!(elapsed_days(start, end), 1);
}

#[test]
fn test_elapsed_minutes_antisymmetry() {
    let a = dt(2024, 1, 1, 8, 15);
    let b = dt(2024, 3, 7, 19, 42);
    assert_eq!(elapsed_minutes(a, b), -elapsed_minutes(b, a));
}

#[test]
fn test_elapsed_negative_when_end_precedes_start() {
    let start = dt(2024, 1, 2, 0, 0);
    let end = dt(2024, 1, 1, 0, 0);
    assert_eq!(elapsed_days(start, end), -1);
    assert_eq!(elapsed_hours(start, end), -24);
}

#[test]
fn test_elapsed_truncates_toward_zero() {
    let start = dt(2024, 1, 1, 0, 0);
    let end = dt(2024, 1, 2, 3, 30); // 27.5 hours later
    assert_eq!(elapsed_hours(start, end), 27);
    assert_eq!(elapsed_minutes(start, end), 1650);
    // hours * 60 never exceeds the minute count in magnitude
    assert!(elapsed_hours(start, end) * 60 <= elapsed_minutes(start, end));
}

#[test]
fn test_elapsed_zero_for_equal_instants() {
    let a = dt(2024, 6, 1, 12, 0);
    assert_eq!(elapsed_minutes(a, a), 0);
    assert_eq!(elapsed_hours(a, a), 0);
    assert_eq!(elapsed_days(a, a), 0);
}
