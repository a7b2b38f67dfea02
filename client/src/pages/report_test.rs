use super::*;

fn filled() -> ReportDraft {
    ReportDraft {
        description: "Deep pothole near the bus stop".to_owned(),
        district: "Khordha".to_owned(),
        ..ReportDraft::default()
    }
}

#[test]
fn defaults_to_odisha_residential_pothole() {
    let draft = ReportDraft::default();
    assert_eq!(draft.state, "Odisha");
    assert_eq!(draft.location_context, "residential");
    assert_eq!(draft.category, IssueCategory::Pothole);
}

#[test]
fn empty_form_reports_every_missing_field() {
    let draft = ReportDraft { state: String::new(), ..ReportDraft::default() };
    let errors = validate_report(&draft);
    assert_eq!(errors.state, Some("State is required."));
    assert_eq!(errors.district, Some("District is required."));
    assert_eq!(errors.description, Some("Description is required."));
    assert!(!errors.is_empty());
}

#[test]
fn blank_description_is_rejected() {
    let draft = ReportDraft { description: "   ".to_owned(), ..filled() };
    let errors = validate_report(&draft);
    assert_eq!(errors.description, Some("Description is required."));
    assert!(errors.state.is_none());
    assert!(errors.district.is_none());
}

#[test]
fn complete_form_passes() {
    assert!(validate_report(&filled()).is_empty());
}

#[test]
fn default_title_prefers_block() {
    let mut draft = filled();
    assert_eq!(default_title(&draft), "Road Hazard in Khordha");
    draft.block = "Patia".to_owned();
    draft.category = IssueCategory::StreetLight;
    assert_eq!(default_title(&draft), "Lighting in Patia");
}

#[test]
fn fields_fill_missing_title_and_skip_unset_coordinates() {
    let fields = report_fields(&filled());
    assert_eq!(fields[0], ("title", "Road Hazard in Khordha".to_owned()));
    assert!(fields.iter().any(|(k, v)| *k == "category" && v == "Pothole"));
    assert!(fields.iter().all(|(k, _)| *k != "latitude" && *k != "longitude"));
}

#[test]
fn fields_keep_explicit_title_and_coordinates() {
    let draft = ReportDraft {
        title: "Broken manhole".to_owned(),
        latitude: Some("20.296100".to_owned()),
        longitude: Some("85.824500".to_owned()),
        ..filled()
    };
    let fields = report_fields(&draft);
    assert_eq!(fields[0].1, "Broken manhole");
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[7], ("latitude", "20.296100".to_owned()));
}

#[test]
fn submission_outcomes() {
    let redirect = ApiResponse { redirect: Some("/profile?new=1".to_owned()), ..ApiResponse::default() };
    assert_eq!(interpret_submission(Ok(redirect)), SubmitOutcome::Navigate("/profile?new=1".to_owned()));

    let rejected = ApiResponse { error: Some("Duplicate report".to_owned()), ..ApiResponse::default() };
    assert_eq!(interpret_submission(Ok(rejected)), SubmitOutcome::Error("Duplicate report".to_owned()));

    assert_eq!(interpret_submission(Ok(ApiResponse::default())), SubmitOutcome::Navigate("/profile".to_owned()));
    assert_eq!(
        interpret_submission(Err("network".to_owned())),
        SubmitOutcome::Error("Failed to submit report. Please try again.".to_owned())
    );
}

#[test]
fn reference_tag_is_six_hex_digits() {
    assert_eq!(reference_tag(0), "REF-000000");
    assert_eq!(reference_tag(0x1_ABCDEF), "REF-ABCDEF");
}
