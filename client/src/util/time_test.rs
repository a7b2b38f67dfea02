use super::*;

const T0: &str = "2025-01-02T10:00:00";

fn t0_ms() -> i64 {
    timestamp_ms(T0).unwrap()
}

#[test]
fn parses_naive_backend_timestamp_as_utc() {
    let dt = parse_timestamp("2025-01-02T10:11:12.123456").unwrap();
    assert_eq!(dt.year(), 2025);
    assert_eq!(dt.hour(), 10);
    assert_eq!(dt.minute(), 11);
    assert_eq!(dt.offset(), time::UtcOffset::UTC);
}

#[test]
fn parses_rfc3339_with_offset() {
    let dt = parse_timestamp("2025-01-02T10:00:00+05:30").unwrap();
    assert_eq!(timestamp_ms("2025-01-02T04:30:00Z"), Some((dt.unix_timestamp_nanos() / 1_000_000) as i64));
}

#[test]
fn rejects_garbage() {
    assert!(parse_timestamp("yesterday").is_none());
    assert!(timestamp_ms("").is_none());
}

#[test]
fn hours_since_floors_partial_hours() {
    let now = t0_ms() + 5 * MS_PER_HOUR + 59 * MS_PER_MINUTE;
    assert_eq!(hours_since(Some(T0), now), 5);
    assert_eq!(minutes_since(Some(T0), now), 5 * 60 + 59);
}

#[test]
fn missing_or_future_timestamps_count_as_zero() {
    assert_eq!(hours_since(None, t0_ms()), 0);
    assert_eq!(hours_since(Some("not a date"), t0_ms()), 0);
    assert_eq!(hours_since(Some(T0), t0_ms() - MS_PER_HOUR), 0);
}

#[test]
fn format_unresolved_switches_to_days() {
    assert_eq!(format_unresolved(0), "0h");
    assert_eq!(format_unresolved(23), "23h");
    assert_eq!(format_unresolved(24), "1d 0h");
    assert_eq!(format_unresolved(77), "3d 5h");
}

#[test]
fn format_date_renders_short_month() {
    assert_eq!(format_date("2025-01-02T10:11:12.5"), "02 Jan 2025, 10:11");
}

#[test]
fn format_date_passes_through_unparseable_input() {
    assert_eq!(format_date("soon"), "soon");
}

#[test]
fn format_clock_is_utc_time_of_day() {
    assert_eq!(format_clock(t0_ms() + 61_000), "10:01:01");
}

#[test]
fn format_uptime_splits_units() {
    let secs = 14 * 86_400 + 7 * 3_600 + 23 * 60 + 59;
    assert_eq!(format_uptime(secs), "14d 7h 23m");
    assert_eq!(format_uptime(0), "0d 0h 0m");
}

#[test]
fn format_date_ms_matches_string_form() {
    assert_eq!(format_date_ms(t0_ms() + 11 * MS_PER_MINUTE), "02 Jan 2025, 10:11");
}
