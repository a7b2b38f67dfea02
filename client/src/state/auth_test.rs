use super::*;
use crate::net::types::{Authority, Citizen};

fn citizen() -> CurrentUser {
    CurrentUser::Citizen(Citizen {
        id: 1,
        username: "asha".to_owned(),
        email: "asha@example.com".to_owned(),
        is_verified: true,
        created_at: None,
        trust_score: None,
    })
}

fn authority() -> CurrentUser {
    CurrentUser::Authority(Authority {
        id: 2,
        username: "ward".to_owned(),
        email: "ward@gov.example".to_owned(),
        state: "Odisha".to_owned(),
        district: "Khordha".to_owned(),
        block: "Patia".to_owned(),
        department: None,
        created_at: None,
    })
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_starts_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn loaded_settles_loading_flag() {
    assert!(!AuthState::loaded(None).loading);
    assert!(!AuthState::loaded(Some(citizen())).loading);
}

#[test]
fn guests_get_citizen_layout() {
    assert_eq!(AuthState::loaded(None).layout_role(), Role::Citizen);
}

#[test]
fn authority_gets_authority_layout() {
    let state = AuthState::loaded(Some(authority()));
    assert_eq!(state.layout_role(), Role::Authority);
    assert!(state.is_authority());
    assert!(!state.is_citizen());
}

#[test]
fn citizen_predicates() {
    let state = AuthState::loaded(Some(citizen()));
    assert!(state.is_citizen());
    assert!(!state.is_authority());
}

// =============================================================
// interpret_login
// =============================================================

#[test]
fn login_with_redirect_succeeds() {
    let resp = ApiResponse {
        success: Some(true),
        redirect: Some("/authority/dashboard".to_owned()),
        role: Some("authority".to_owned()),
        ..ApiResponse::default()
    };
    assert_eq!(
        interpret_login(Ok(resp)),
        LoginOutcome::Success { redirect: "/authority/dashboard".to_owned() }
    );
}

#[test]
fn login_error_body_is_surfaced() {
    let resp = ApiResponse {
        success: Some(false),
        error: Some("Invalid credentials".to_owned()),
        ..ApiResponse::default()
    };
    assert_eq!(interpret_login(Ok(resp)), LoginOutcome::Failure("Invalid credentials".to_owned()));
}

#[test]
fn login_without_redirect_or_error_uses_fallback() {
    assert_eq!(
        interpret_login(Ok(ApiResponse::default())),
        LoginOutcome::Failure("Login failed".to_owned())
    );
}

#[test]
fn login_transport_error_is_reported() {
    assert_eq!(
        interpret_login(Err("network down".to_owned())),
        LoginOutcome::Failure("network down".to_owned())
    );
    assert_eq!(interpret_login(Err("  ".to_owned())), LoginOutcome::Failure("Login failed".to_owned()));
}
