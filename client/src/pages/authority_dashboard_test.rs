use super::*;
use crate::net::types::IssueCategory;

fn case(id: i64, severity: f64, at: Option<(f64, f64)>) -> Issue {
    Issue {
        id,
        user_id: None,
        title: format!("case {id}"),
        description: String::new(),
        category: IssueCategory::Garbage,
        latitude: at.map(|(lat, _)| lat),
        longitude: at.map(|(_, lng)| lng),
        image_path: None,
        status: IssueStatus::Pending,
        severity_score: severity,
        severity_level: None,
        location_context: None,
        state: None,
        district: None,
        block: None,
        created_at: None,
    }
}

#[test]
fn assignment_and_start_move_to_in_progress() {
    assert_eq!(target_status(&CaseAction::Assign("Water Supply".to_owned())), Ok(IssueStatus::InProgress));
    assert_eq!(target_status(&CaseAction::StartWork), Ok(IssueStatus::InProgress));
}

#[test]
fn resolution_requires_a_note() {
    let blank = CaseAction::Resolve { note: "  \n".to_owned() };
    assert_eq!(target_status(&blank), Err("Resolution note is required."));
    let noted = CaseAction::Resolve { note: "Patched with cold mix".to_owned() };
    assert_eq!(target_status(&noted), Ok(IssueStatus::Resolved));
}

#[test]
fn apply_status_patches_only_the_matching_case() {
    let mut list = vec![case(1, 10.0, None), case(2, 20.0, None)];
    assert!(apply_status(&mut list, 2, IssueStatus::Resolved));
    assert_eq!(list[0].status, IssueStatus::Pending);
    assert_eq!(list[1].status, IssueStatus::Resolved);
    assert!(!apply_status(&mut list, 9, IssueStatus::Resolved));
}

#[test]
fn zone_condition_turns_critical_above_seventy() {
    assert_eq!(zone_condition(70), ("Stable Condition", false));
    assert_eq!(zone_condition(71), ("Critical Condition", true));
}

#[test]
fn markers_skip_cases_without_coordinates() {
    let list = vec![case(1, 85.0, Some((20.3, 85.8))), case(2, 40.0, None), case(3, 55.0, Some((20.4, 85.9)))];
    let markers = case_markers(&list);
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].color, CriBand::Red);
    assert_eq!(markers[1].color, CriBand::Orange);
    assert_eq!(markers[1].block, "case 3");
}

#[test]
fn five_departments_are_offered() {
    assert_eq!(DEPARTMENTS.len(), 5);
    assert_eq!(DEPARTMENTS[0], "Road Maintenance");
    assert_eq!(DEPARTMENTS[4], "Civil Works");
}

#[test]
fn settle_case_patches_queue_and_closes_the_open_case() {
    let owner = Owner::new();
    owner.with(|| {
        let issues = RwSignal::new(vec![case(1, 40.0, None), case(2, 80.0, None)]);
        let selected = RwSignal::new(Some(case(2, 80.0, None)));
        settle_case(issues, selected, 2, IssueStatus::Resolved);
        assert_eq!(issues.with_untracked(|list| list[1].status), IssueStatus::Resolved);
        assert_eq!(issues.with_untracked(|list| list[0].status), IssueStatus::Pending);
        assert!(selected.get_untracked().is_none());
    });
}

#[test]
fn settle_case_keeps_a_different_open_case() {
    let owner = Owner::new();
    owner.with(|| {
        let issues = RwSignal::new(vec![case(1, 40.0, None), case(2, 80.0, None)]);
        let selected = RwSignal::new(Some(case(1, 40.0, None)));
        settle_case(issues, selected, 2, IssueStatus::InProgress);
        assert_eq!(selected.get_untracked().map(|s| s.id), Some(1));
    });
}

#[test]
fn settle_case_after_teardown_is_ignored() {
    let owner = Owner::new();
    let (issues, selected) = owner.with(|| (RwSignal::new(vec![case(7, 90.0, None)]), RwSignal::new(Some(case(7, 90.0, None)))));
    owner.cleanup();
    settle_case(issues, selected, 7, IssueStatus::Resolved);
    assert!(issues.try_get_untracked().is_none());
    assert!(selected.try_get_untracked().is_none());
}

#[test]
fn case_list_link_targets_the_queue() {
    assert_eq!(queue_link(), format!("#{QUEUE_ID}"));
    assert_eq!(queue_link(), "#queue");
}
