use super::*;

#[test]
fn every_state_has_a_district_list() {
    for state in STATES {
        assert!(!districts_of(state).is_empty(), "missing districts for {state}");
    }
}

#[test]
fn districts_of_known_state() {
    assert!(districts_of("Odisha").contains(&"Khordha"));
    assert!(districts_of("Goa").contains(&"South Goa"));
}

#[test]
fn districts_of_unknown_state_is_empty() {
    assert!(districts_of("Atlantis").is_empty());
    assert!(districts_of("").is_empty());
}

#[test]
fn blocks_of_served_district() {
    assert!(blocks_of("Khordha").contains(&"Patia"));
    assert!(blocks_of("Pune").contains(&"Hinjewadi"));
}

#[test]
fn blocks_of_unserved_district_is_empty() {
    assert!(blocks_of("Anantapur").is_empty());
}
