use super::*;

#[test]
fn national_averages_round_to_nearest() {
    assert_eq!(rounded_mean(&JURISDICTIONS, |j| j.cri), 69);
    assert_eq!(rounded_mean(&JURISDICTIONS, |j| j.avg_response), 28);
    assert_eq!(rounded_mean(&JURISDICTIONS, |j| j.resolved), 57);
}

#[test]
fn empty_table_averages_to_zero() {
    assert_eq!(rounded_mean(&[], |j| j.cri), 0);
}

#[test]
fn rankings_are_ordered_by_cri() {
    assert!(JURISDICTIONS.windows(2).all(|w| w[0].cri > w[1].cri));
    assert_eq!(JURISDICTIONS.iter().map(|j| j.rank).collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
}

#[test]
fn tones_follow_thresholds() {
    assert_eq!(cri_tone(80), "tone--red");
    assert_eq!(cri_tone(79), "tone--orange");
    assert_eq!(cri_tone(49), "tone--green");
    assert_eq!(response_tone(68), "tone--red");
    assert_eq!(response_tone(48), "tone--orange");
    assert_eq!(response_tone(24), "tone--muted");
    assert_eq!(resolved_tone(49), "tone--red");
    assert_eq!(resolved_tone(69), "tone--orange");
    assert_eq!(resolved_tone(70), "tone--green");
}
