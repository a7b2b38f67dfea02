use super::*;

#[test]
fn freshness_starts_at_two_minutes() {
    assert_eq!(freshness_label(0), "Updated 2 minutes ago");
    assert_eq!(freshness_label(179), "Updated 2 minutes ago");
}

#[test]
fn freshness_cycles_every_three_minutes() {
    assert_eq!(freshness_label(180), "Updated just now");
    assert_eq!(freshness_label(240), "Updated 1 minute ago");
    assert_eq!(freshness_label(300), "Updated 2 minutes ago");
    assert_eq!(freshness_label(360), "Updated just now");
}

#[test]
fn timeline_escalates_to_systemic() {
    let levels: Vec<_> = STAGES.iter().map(|s| s.level).collect();
    assert_eq!(levels, ["Minor", "Escalated", "Critical", "Systemic"]);
    assert_eq!(STAGES[3].cri, "+65");
}

#[test]
fn level_colors() {
    assert_eq!(level_color("Systemic"), "#000000");
    assert_eq!(level_color("Critical"), "var(--risk-critical)");
    assert_eq!(level_color("Minor"), "var(--text-muted)");
}

#[test]
fn audiences_point_to_their_entry_pages() {
    assert_eq!(Audience::default(), Audience::Citizens);
    assert_eq!(Audience::Citizens.pitch().href, "/report");
    assert_eq!(Audience::Authorities.pitch().href, "/login");
}
