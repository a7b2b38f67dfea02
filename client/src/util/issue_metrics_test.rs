use super::*;
use crate::net::types::IssueCategory;
use crate::util::time::{MS_PER_HOUR, MS_PER_MINUTE, timestamp_ms};

const T0: &str = "2025-03-01T00:00:00";

fn t0() -> i64 {
    timestamp_ms(T0).unwrap()
}

fn issue(id: i64, status: IssueStatus, severity: f64, created_at: Option<&str>) -> Issue {
    Issue {
        id,
        user_id: Some(1),
        title: format!("issue {id}"),
        description: String::new(),
        category: IssueCategory::Pothole,
        latitude: None,
        longitude: None,
        image_path: None,
        status,
        severity_score: severity,
        severity_level: None,
        location_context: None,
        state: None,
        district: None,
        block: None,
        created_at: created_at.map(str::to_owned),
    }
}

#[test]
fn counts_by_status_and_severity() {
    let issues = vec![
        issue(1, IssueStatus::Pending, 80.0, None),
        issue(2, IssueStatus::InProgress, 71.0, None),
        issue(3, IssueStatus::Resolved, 95.0, None),
        issue(4, IssueStatus::Pending, 70.0, None),
    ];
    assert_eq!(pending_count(&issues), 2);
    assert_eq!(resolved_count(&issues), 1);
    assert_eq!(unresolved_count(&issues), 3);
    assert_eq!(critical_open_count(&issues), 2);
    assert_eq!(high_severity_count(&issues), 3);
}

#[test]
fn zone_cri_sums_unresolved_and_caps() {
    let issues = vec![
        issue(1, IssueStatus::Pending, 20.4, None),
        issue(2, IssueStatus::InProgress, 10.3, None),
        issue(3, IssueStatus::Resolved, 50.0, None),
    ];
    assert_eq!(zone_cri(&issues), 31);

    let heavy = vec![issue(1, IssueStatus::Pending, 80.0, None), issue(2, IssueStatus::Pending, 45.0, None)];
    assert_eq!(zone_cri(&heavy), 100);
    assert_eq!(zone_cri(&[]), 0);
}

#[test]
fn resolving_drops_zone_cri() {
    let mut issues = vec![issue(1, IssueStatus::Pending, 40.0, None), issue(2, IssueStatus::Pending, 25.0, None)];
    assert_eq!(zone_cri(&issues), 65);
    issues[0].status = IssueStatus::Resolved;
    assert_eq!(zone_cri(&issues), 25);
}

#[test]
fn age_under_an_hour_is_just_now() {
    let age = issue_age(Some(T0), t0() + 59 * MS_PER_MINUTE);
    assert_eq!(age.text, "Just now");
    assert_eq!(age.tone, AgeTone::Fresh);
    assert!(!age.urgent);
    assert_eq!(age.escalation.minutes, 1);
}

#[test]
fn age_in_hours_becomes_urgent_after_six() {
    let six = issue_age(Some(T0), t0() + 6 * MS_PER_HOUR);
    assert_eq!(six.text, "6h ago");
    assert!(!six.urgent);

    let seven = issue_age(Some(T0), t0() + 7 * MS_PER_HOUR + 15 * MS_PER_MINUTE);
    assert_eq!(seven.text, "7h ago");
    assert_eq!(seven.tone, AgeTone::Aging);
    assert!(seven.urgent);
    assert_eq!(seven.escalation.minutes, 45);
}

#[test]
fn age_in_days() {
    let one = issue_age(Some(T0), t0() + 30 * MS_PER_HOUR);
    assert_eq!(one.text, "1 day ago");
    assert_eq!(one.tone, AgeTone::Overdue);

    let three = issue_age(Some(T0), t0() + 75 * MS_PER_HOUR);
    assert_eq!(three.text, "3d ago");
    assert_eq!(three.tone, AgeTone::Stale);
    assert!(three.urgent);
}

#[test]
fn missing_timestamp_reads_as_just_now() {
    let age = issue_age(None, t0());
    assert_eq!(age.text, "Just now");
    assert_eq!(age.escalation.minutes, 60);
}

#[test]
fn escalation_points_follow_log_curve() {
    let age = issue_age(Some(T0), t0() + 10 * MS_PER_HOUR);
    let expected = 12f64.ln() * 2.0 - 11f64.ln() * 2.0;
    assert!((age.escalation.points - expected).abs() < 1e-12);
    assert_eq!(age.escalation.label(), format!("+{expected:.1} pts in 60m"));
}

#[test]
fn escalation_label_uses_two_decimals_past_a_day() {
    let age = issue_age(Some(T0), t0() + 72 * MS_PER_HOUR + 20 * MS_PER_MINUTE);
    assert_eq!(age.escalation.decimals, 2);
    assert!(age.escalation.label().ends_with(" pts in 40m"));
}

#[test]
fn soonest_escalation_picks_fewest_minutes_among_urgent() {
    let now = t0() + 100 * MS_PER_HOUR;
    let issues = vec![
        // 10h 50m old: 10 minutes to go
        issue(1, IssueStatus::Pending, 10.0, Some("2025-03-04T17:10:00")),
        // 20h 30m old: 30 minutes to go
        issue(2, IssueStatus::InProgress, 10.0, Some("2025-03-04T07:30:00")),
        // resolved, 5 minutes to go, ignored
        issue(3, IssueStatus::Resolved, 10.0, Some("2025-03-04T00:55:00")),
        // 2h old: not urgent
        issue(4, IssueStatus::Pending, 10.0, Some("2025-03-05T02:00:00")),
    ];
    let (esc, count) = soonest_escalation(&issues, now).unwrap();
    assert_eq!(esc.minutes, 10);
    assert_eq!(count, 2);
}

#[test]
fn soonest_escalation_none_without_urgent_issues() {
    let issues = vec![issue(1, IssueStatus::Pending, 10.0, Some(T0))];
    assert!(soonest_escalation(&issues, t0() + MS_PER_HOUR).is_none());
}

#[test]
fn risk_impact_grows_per_six_hours_and_caps() {
    assert_eq!(risk_impact(5, IssueStatus::Pending), 0);
    assert_eq!(risk_impact(13, IssueStatus::Pending), 2);
    assert_eq!(risk_impact(500, IssueStatus::InProgress), 20);
    assert_eq!(risk_impact(500, IssueStatus::Resolved), 0);
}

#[test]
fn escalating_only_for_old_pending() {
    assert!(is_escalating(49, IssueStatus::Pending));
    assert!(!is_escalating(48, IssueStatus::Pending));
    assert!(!is_escalating(100, IssueStatus::InProgress));
}

#[test]
fn feed_orders_unresolved_then_oldest() {
    let now = t0() + 48 * MS_PER_HOUR;
    let mut issues = vec![
        issue(1, IssueStatus::Resolved, 0.0, Some("2025-03-01T00:00:00")),
        issue(2, IssueStatus::Pending, 0.0, Some("2025-03-02T12:00:00")),
        issue(3, IssueStatus::InProgress, 0.0, Some("2025-03-01T06:00:00")),
        issue(4, IssueStatus::Resolved, 0.0, Some("2025-03-02T00:00:00")),
    ];
    sort_feed(&mut issues, now);
    let order: Vec<i64> = issues.iter().map(|i| i.id).collect();
    assert_eq!(order, vec![3, 2, 1, 4]);
}

#[test]
fn total_unresolved_hours_skips_resolved() {
    let now = t0() + 10 * MS_PER_HOUR;
    let issues = vec![
        issue(1, IssueStatus::Pending, 0.0, Some(T0)),
        issue(2, IssueStatus::InProgress, 0.0, Some("2025-03-01T04:00:00")),
        issue(3, IssueStatus::Resolved, 0.0, Some(T0)),
    ];
    assert_eq!(total_unresolved_hours(&issues, now), 16);
}
