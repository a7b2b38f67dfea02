use super::*;

#[test]
fn cri_label_thresholds_are_exclusive() {
    assert_eq!(cri_label(80.0).0, "MODERATE");
    assert_eq!(cri_label(80.5).0, "CRITICAL");
    assert_eq!(cri_label(50.0).0, "STABLE");
    assert_eq!(cri_label(51.0), ("MODERATE", "tone--orange"));
}

#[test]
fn pillar_slices_use_risk_not_percent() {
    let pillars = vec![
        Pillar { name: "Public Health".to_owned(), risk: 34.0, percent: 40.0 },
        Pillar { name: "Mobility".to_owned(), risk: 12.5, percent: 15.0 },
    ];
    assert_eq!(
        pillar_slices(&pillars),
        vec![("Public Health".to_owned(), 34.0), ("Mobility".to_owned(), 12.5)]
    );
}

#[test]
fn distribution_bars_follow_key_order() {
    let mut dist = BTreeMap::new();
    dist.insert("Pothole".to_owned(), 4);
    dist.insert("Garbage".to_owned(), 9);
    assert_eq!(distribution_bars(&dist), vec![("Garbage".to_owned(), 9), ("Pothole".to_owned(), 4)]);
}

#[test]
fn blank_hotspot_duration_reads_zero_hours() {
    let mut spot = Hotspot {
        area: "Patia".to_owned(),
        cri: 82.0,
        dominant_risk: "Mobility".to_owned(),
        duration: String::new(),
    };
    assert_eq!(hotspot_duration(&spot), "0h");
    spot.duration = "36h".to_owned();
    assert_eq!(hotspot_duration(&spot), "36h");
}
