use super::*;
use crate::net::types::{Authority, Citizen, CurrentUser};

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
        username: "ward-office".to_owned(),
        email: "ward@example.gov".to_owned(),
        state: "Odisha".to_owned(),
        district: "Khordha".to_owned(),
        block: "Bhubaneswar".to_owned(),
        department: None,
        created_at: None,
    })
}

#[test]
fn waits_while_loading() {
    let state = AuthState::default();
    assert_eq!(check_access(&state, Requirement::LoggedIn), Access::Pending);
    assert_eq!(check_access(&state, Requirement::Authority), Access::Pending);
}

#[test]
fn logged_out_visitors_go_to_login() {
    let state = AuthState::loaded(None);
    for requirement in [Requirement::LoggedIn, Requirement::Citizen, Requirement::Authority] {
        assert_eq!(check_access(&state, requirement), Access::Redirect(LOGIN_PATH));
    }
}

#[test]
fn any_identity_passes_logged_in_guard() {
    assert_eq!(check_access(&AuthState::loaded(Some(citizen())), Requirement::LoggedIn), Access::Granted);
    assert_eq!(check_access(&AuthState::loaded(Some(authority())), Requirement::LoggedIn), Access::Granted);
}

#[test]
fn citizen_guard_sends_authority_to_dashboard() {
    let state = AuthState::loaded(Some(authority()));
    assert_eq!(check_access(&state, Requirement::Citizen), Access::Redirect(AUTHORITY_HOME));
    assert_eq!(check_access(&AuthState::loaded(Some(citizen())), Requirement::Citizen), Access::Granted);
}

#[test]
fn authority_guard_sends_citizen_to_profile() {
    let state = AuthState::loaded(Some(citizen()));
    assert_eq!(check_access(&state, Requirement::Authority), Access::Redirect(CITIZEN_HOME));
    assert_eq!(check_access(&AuthState::loaded(Some(authority())), Requirement::Authority), Access::Granted);
}
