use super::*;

const NOW: i64 = 1_740_787_200_000; // 2025-03-01T00:00:00Z

#[test]
fn known_ids_resolve_to_records() {
    let pothole = find_record("1").unwrap();
    assert_eq!(pothole.block, "Rohini");
    assert_eq!(pothole.status, IssueStatus::InProgress);
    assert_eq!(pothole.severity, 78.0);

    let light = find_record("2").unwrap();
    assert_eq!(light.reported_hours_ago, 336);
    assert!(light.acknowledged_hours_ago.is_none());
}

#[test]
fn unknown_ids_are_not_found() {
    assert!(find_record("3").is_none());
    assert!(find_record("").is_none());
    assert!(find_record("abc").is_none());
}

#[test]
fn timeline_marks_acknowledged_record() {
    let steps = timeline(&find_record("1").unwrap(), NOW);
    assert_eq!(steps.clone().map(|s| s.label), ["Reported", "Acknowledged", "Resolved"]);
    assert_eq!(steps[0].at_ms, Some(NOW - 72 * MS_PER_HOUR));
    assert_eq!(steps[1].at_ms, Some(NOW - 48 * MS_PER_HOUR));
    assert!(!steps[2].complete());
    assert_eq!(steps[2].caption(), "Awaiting action");
    assert_eq!(steps[0].caption(), "26 Feb 2025, 00:00");
}

#[test]
fn pending_record_awaits_acknowledgement() {
    let steps = timeline(&find_record("2").unwrap(), NOW);
    assert!(steps[0].complete());
    assert!(!steps[1].complete());
}

#[test]
fn severity_bands() {
    assert_eq!(severity_class(80.0), "tone--red");
    assert_eq!(severity_class(78.0), "tone--orange");
    assert_eq!(severity_class(45.0), "tone--green");
}

#[test]
fn both_records_are_overdue_and_accrue_capped_risk() {
    let pothole = find_record("1").unwrap();
    assert!(is_overdue(&pothole));
    assert_eq!(risk_impact(pothole.reported_hours_ago, pothole.status), 12);

    let light = find_record("2").unwrap();
    assert_eq!(risk_impact(light.reported_hours_ago, light.status), 20);

    let closed = PublicRecord { status: IssueStatus::Resolved, ..light };
    assert!(!is_overdue(&closed));
}
