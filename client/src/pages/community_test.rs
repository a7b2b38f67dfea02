use super::*;
use crate::net::types::IssueCategory;

fn located(block: Option<&str>, district: Option<&str>) -> Issue {
    Issue {
        id: 1,
        user_id: None,
        title: "Overflowing bin".to_owned(),
        description: String::new(),
        category: IssueCategory::Garbage,
        latitude: None,
        longitude: None,
        image_path: None,
        status: IssueStatus::Pending,
        severity_score: 0.0,
        severity_level: None,
        location_context: None,
        state: None,
        district: district.map(str::to_owned),
        block: block.map(str::to_owned),
        created_at: None,
    }
}

#[test]
fn age_class_escalates_with_time() {
    assert_eq!(age_class(3, IssueStatus::Pending), "age");
    assert_eq!(age_class(25, IssueStatus::Pending), "age age--warning");
    assert_eq!(age_class(49, IssueStatus::InProgress), "age age--critical");
    assert_eq!(age_class(500, IssueStatus::Resolved), "age age--resolved");
}

#[test]
fn resolved_issues_show_a_dash() {
    assert_eq!(unresolved_label(30, IssueStatus::Resolved), "\u{2014}");
    assert_eq!(unresolved_label(30, IssueStatus::Pending), "1d 6h");
    assert_eq!(unresolved_label(5, IssueStatus::Pending), "5h");
}

#[test]
fn location_line_skips_missing_parts() {
    assert_eq!(location_line(&located(Some("Patia"), Some("Khordha"))), "Patia, Khordha");
    assert_eq!(location_line(&located(None, Some("Khordha"))), "Khordha");
    assert_eq!(location_line(&located(Some(""), None)), "");
}
