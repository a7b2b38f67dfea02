use super::*;

#[test]
fn uptime_starts_at_fourteen_days() {
    assert_eq!(format_uptime(uptime_secs(1_000, 1_000)), "14d 7h 23m");
}

#[test]
fn uptime_advances_with_the_clock() {
    let loaded = 5_000_000;
    assert_eq!(uptime_secs(loaded, loaded + 61_500), UPTIME_AT_LOAD_SECS + 61);
    assert_eq!(format_uptime(uptime_secs(loaded, loaded + 37 * 60_000)), "14d 8h 0m");
}

#[test]
fn clock_skew_never_rewinds_uptime() {
    assert_eq!(uptime_secs(10_000, 0), UPTIME_AT_LOAD_SECS);
}

#[test]
fn calc_counter_wraps_after_fifty_nine() {
    assert_eq!(next_calc_minutes(12), 13);
    assert_eq!(next_calc_minutes(58), 59);
    assert_eq!(next_calc_minutes(59), 0);
}

#[test]
fn tables_are_populated() {
    assert_eq!(COMPONENTS.len(), 6);
    assert_eq!(COMPONENTS[5], ("Database Cluster", "8ms"));
    assert_eq!(EVENTS.iter().filter(|e| e.2 == EventKind::Alert).count(), 1);
}
