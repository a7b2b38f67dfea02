use super::*;

#[test]
fn each_status_has_its_own_tone() {
    assert_eq!(badge_tone(IssueStatus::Pending), "amber");
    assert_eq!(badge_tone(IssueStatus::InProgress), "blue");
    assert_eq!(badge_tone(IssueStatus::Resolved), "green");
}

#[test]
fn tones_are_distinct() {
    let tones: std::collections::HashSet<&str> = IssueStatus::ALL.iter().map(|s| badge_tone(*s)).collect();
    assert_eq!(tones.len(), 3);
}

#[test]
fn class_carries_modifier() {
    assert_eq!(badge_class(IssueStatus::InProgress), "status-badge status-badge--blue");
}
