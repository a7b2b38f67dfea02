use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_issue_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "Pothole near school gate",
        "description": "Deep pothole",
        "category": "Pothole",
        "status": "In Progress",
        "severity_score": 72.5,
        "block": "Patia",
        "district": "Khordha",
        "image_path": "abc.jpg",
        "created_at": "2025-01-02T10:11:12.123456"
    })
}

// =============================================================
// CurrentUser
// =============================================================

#[test]
fn current_user_decodes_citizen_by_role() {
    let raw = serde_json::json!({
        "id": 1,
        "username": "asha",
        "email": "asha@example.com",
        "role": "citizen",
        "created_at": "2025-01-01T00:00:00"
    });
    let user: CurrentUser = serde_json::from_value(raw).unwrap();
    assert!(user.is_citizen());
    assert_eq!(user.username(), "asha");
    assert_eq!(user.role(), Role::Citizen);
}

#[test]
fn current_user_decodes_authority_jurisdiction() {
    let raw = serde_json::json!({
        "id": 2,
        "username": "ward-office",
        "email": "ward@gov.example",
        "role": "authority",
        "state": "Odisha",
        "district": "Khordha",
        "block": "Patia"
    });
    let user: CurrentUser = serde_json::from_value(raw).unwrap();
    match user {
        CurrentUser::Authority(a) => {
            assert_eq!(a.state, "Odisha");
            assert_eq!(a.district, "Khordha");
            assert_eq!(a.block, "Patia");
        }
        CurrentUser::Citizen(_) => panic!("expected authority"),
    }
}

#[test]
fn current_user_null_jurisdiction_reads_as_empty() {
    let raw = serde_json::json!({
        "id": 3,
        "username": "x",
        "email": "x@y",
        "role": "authority",
        "state": null,
        "district": null,
        "block": null
    });
    let user: CurrentUser = serde_json::from_value(raw).unwrap();
    let CurrentUser::Authority(a) = user else {
        panic!("expected authority");
    };
    assert!(a.state.is_empty());
    assert!(a.block.is_empty());
}

#[test]
fn me_endpoint_null_decodes_as_no_user() {
    let user: Option<CurrentUser> = serde_json::from_str("null").unwrap();
    assert!(user.is_none());
}

// =============================================================
// Issue
// =============================================================

#[test]
fn issue_decodes_backend_row() {
    let issue: Issue = serde_json::from_value(make_issue_json()).unwrap();
    assert_eq!(issue.id, 7);
    assert_eq!(issue.category, IssueCategory::Pothole);
    assert_eq!(issue.status, IssueStatus::InProgress);
    assert!((issue.severity_score - 72.5).abs() < f64::EPSILON);
    assert_eq!(issue.place(), "Patia");
}

#[test]
fn issue_missing_severity_reads_as_zero() {
    let mut raw = make_issue_json();
    raw.as_object_mut().unwrap().remove("severity_score");
    let issue: Issue = serde_json::from_value(raw).unwrap();
    assert_eq!(issue.severity_score, 0.0);

    let mut raw = make_issue_json();
    raw["severity_score"] = serde_json::Value::Null;
    let issue: Issue = serde_json::from_value(raw).unwrap();
    assert_eq!(issue.severity_score, 0.0);
}

#[test]
fn issue_place_falls_back_to_district() {
    let mut raw = make_issue_json();
    raw["block"] = serde_json::json!("");
    let issue: Issue = serde_json::from_value(raw).unwrap();
    assert_eq!(issue.place(), "Khordha");
}

#[test]
fn issue_unknown_category_is_preserved() {
    let mut raw = make_issue_json();
    raw["category"] = serde_json::json!("Stray Animals");
    let issue: Issue = serde_json::from_value(raw).unwrap();
    assert_eq!(issue.category, IssueCategory::Unlisted("Stray Animals".to_owned()));
    assert_eq!(issue.category.as_str(), "Stray Animals");
}

// =============================================================
// IssueStatus / IssueCategory
// =============================================================

#[test]
fn issue_status_uses_spaced_wire_name() {
    assert_eq!(serde_json::to_string(&IssueStatus::InProgress).unwrap(), "\"In Progress\"");
    let parsed: IssueStatus = serde_json::from_str("\"Resolved\"").unwrap();
    assert_eq!(parsed, IssueStatus::Resolved);
}

#[test]
fn issue_status_rejects_unknown_value() {
    assert!(serde_json::from_str::<IssueStatus>("\"Closed\"").is_err());
}

#[test]
fn issue_category_official_labels() {
    let categories = IssueCategory::SELECTABLE;
    let labels: Vec<&str> = categories.iter().map(IssueCategory::official_label).collect();
    assert_eq!(labels, vec!["Road Hazard", "Sanitation", "Lighting", "Water Supply", "Traffic", "Other"]);
}

#[test]
fn issue_category_serializes_wire_string() {
    assert_eq!(serde_json::to_string(&IssueCategory::StreetLight).unwrap(), "\"Street Light\"");
}

// =============================================================
// CRI
// =============================================================

#[test]
fn cri_band_thresholds() {
    assert_eq!(CriBand::from_score(95.0), CriBand::Red);
    assert_eq!(CriBand::from_score(80.0), CriBand::Red);
    assert_eq!(CriBand::from_score(79.9), CriBand::Orange);
    assert_eq!(CriBand::from_score(50.0), CriBand::Orange);
    assert_eq!(CriBand::from_score(49.0), CriBand::Green);
}

#[test]
fn cri_point_decodes_with_optional_issue_count() {
    let raw = serde_json::json!([
        { "block": "Patia", "cri": 82, "color": "red", "lat": 20.355, "lng": 85.818 },
        { "block": "Old Town", "cri": 12.5, "color": "green", "lat": 20.24, "lng": 85.83, "issue_count": 3 }
    ]);
    let points: Vec<CriPoint> = serde_json::from_value(raw).unwrap();
    assert_eq!(points[0].color, CriBand::Red);
    assert_eq!(points[0].issue_count, None);
    assert_eq!(points[1].issue_count, Some(3));
}

#[test]
fn location_tree_accepts_flat_and_nested_listings() {
    let raw = serde_json::json!({
        "Odisha": { "Khordha": ["Patia"], "Cuttack": [] },
        "Goa": ["North Goa", "South Goa"]
    });
    let tree: LocationTree = serde_json::from_value(raw).unwrap();
    assert_eq!(tree["Odisha"].districts(), vec!["Cuttack".to_owned(), "Khordha".to_owned()]);
    assert_eq!(tree["Goa"].districts(), vec!["North Goa".to_owned(), "South Goa".to_owned()]);
}

// =============================================================
// Responses
// =============================================================

#[test]
fn api_response_tolerates_sparse_bodies() {
    let resp: ApiResponse = serde_json::from_str(r#"{"error":"Invalid credentials","success":false}"#).unwrap();
    assert_eq!(resp.error.as_deref(), Some("Invalid credentials"));
    assert!(!resp.succeeded());
    let resp: ApiResponse = serde_json::from_str("{}").unwrap();
    assert!(!resp.succeeded());
}

#[test]
fn analytics_package_decodes_backend_shape() {
    let raw = serde_json::json!({
        "summary": { "cri_score": 64, "high_risk_count": 3, "avg_res_time": "4.2 hours", "repeat_rate": "12%" },
        "pillars": [{ "name": "Public Safety", "risk": 40.5, "percent": 30 }],
        "trend": { "labels": ["Mon", "Tue"], "values": [10, 20] },
        "hotspots": [{ "area": "Patia", "cri": 120.0, "dominant_risk": "Pothole", "duration": "6d" }],
        "distribution": { "Pothole": 4, "Garbage": 2 }
    });
    let pkg: AnalyticsPackage = serde_json::from_value(raw).unwrap();
    assert_eq!(pkg.summary.cri_score, 64.0);
    assert_eq!(pkg.summary.avg_res_time, "4.2 hours");
    assert_eq!(pkg.trend.values, vec![10.0, 20.0]);
    assert_eq!(pkg.distribution["Pothole"], 4);
}

#[test]
fn hotspot_without_block_keeps_the_package() {
    let raw = r#"{
        "summary": { "cri_score": 40 },
        "hotspots": [
            { "area": null, "cri": 55.0, "dominant_risk": null, "duration": "2d" },
            { "area": "Patia", "cri": 30.0, "dominant_risk": "Pothole", "duration": null }
        ]
    }"#;
    let pkg: AnalyticsPackage = serde_json::from_str(raw).unwrap();
    assert_eq!(pkg.hotspots.len(), 2);
    assert_eq!(pkg.hotspots[0].area, "");
    assert_eq!(pkg.hotspots[0].dominant_risk, "");
    assert_eq!(pkg.hotspots[0].cri, 55.0);
    assert_eq!(pkg.hotspots[1].area, "Patia");
    assert_eq!(pkg.hotspots[1].duration, "");
}

#[test]
fn status_update_serializes_wire_status() {
    let body = StatusUpdate { issue_id: 9, status: IssueStatus::Resolved };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "issue_id": 9, "status": "Resolved" })
    );
}
