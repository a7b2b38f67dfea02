use super::*;

fn envelope() -> ApiResponse {
    ApiResponse::default()
}

#[test]
fn otp_request_requires_email() {
    assert_eq!(validate_otp_request("  "), Err("Please enter email"));
    assert_eq!(validate_otp_request(" a@b.com "), Ok("a@b.com".to_owned()));
}

#[test]
fn otp_sent_when_backend_returns_message() {
    let ok = ApiResponse { message: Some("OTP sent".to_owned()), ..envelope() };
    assert_eq!(interpret_otp_response(Ok(ok)), Ok(()));
}

#[test]
fn otp_failure_prefers_backend_error() {
    let rejected = ApiResponse { error: Some("Email already registered".to_owned()), ..envelope() };
    assert_eq!(interpret_otp_response(Ok(rejected)), Err("Email already registered".to_owned()));
    assert_eq!(interpret_otp_response(Ok(envelope())), Err("Failed to send OTP".to_owned()));
    assert_eq!(interpret_otp_response(Err("offline".to_owned())), Err("Failed to send OTP".to_owned()));
}

#[test]
fn submission_blocked_without_acknowledgement() {
    assert_eq!(require_acknowledgement(false), Err("Please acknowledge the terms"));
    assert_eq!(require_acknowledgement(true), Ok(()));
}

#[test]
fn citizen_registration_follows_redirect() {
    let ok = ApiResponse { redirect: Some("/profile".to_owned()), ..envelope() };
    assert_eq!(interpret_citizen_registration(Ok(ok)), Ok("/profile".to_owned()));
}

#[test]
fn citizen_registration_surfaces_error() {
    let bad = ApiResponse { error: Some("Invalid OTP".to_owned()), ..envelope() };
    assert_eq!(interpret_citizen_registration(Ok(bad)), Err("Invalid OTP".to_owned()));
    assert_eq!(interpret_citizen_registration(Ok(envelope())), Err("Registration failed".to_owned()));
    assert_eq!(interpret_citizen_registration(Err("boom".to_owned())), Err("Registration failed".to_owned()));
}

#[test]
fn authority_registration_outcomes() {
    let ok = ApiResponse { message: Some("Authority registered".to_owned()), ..envelope() };
    assert_eq!(interpret_authority_registration(Ok(ok)), Ok(()));

    let taken = ApiResponse { error: Some("Email exists".to_owned()), ..envelope() };
    assert_eq!(interpret_authority_registration(Ok(taken)), Err("Registration failed".to_owned()));

    let flagged = ApiResponse { success: Some(false), ..envelope() };
    assert!(interpret_authority_registration(Ok(flagged)).is_err());
    assert!(interpret_authority_registration(Err("offline".to_owned())).is_err());
}

#[test]
fn authority_form_defaults_to_bhubaneswar() {
    let form = default_authority_form();
    assert_eq!(form.state, "Odisha");
    assert_eq!(form.district, "Khordha");
    assert_eq!(form.block, "Bhubaneswar Ward 19");
    assert!(form.username.is_empty());
    assert!(districts_of(&form.state).contains(&form.district.as_str()));
    assert!(blocks_of(&form.district).contains(&form.block.as_str()));
}

#[test]
fn citizen_is_default_tab() {
    assert_eq!(RegisterTab::default(), RegisterTab::Citizen);
}
