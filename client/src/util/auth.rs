//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior for logged-out
//! and wrong-role visitors. The decision is a pure function of `AuthState`
//! so guards can be tested without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const CITIZEN_HOME: &str = "/profile";
pub const AUTHORITY_HOME: &str = "/authority/dashboard";

/// Who may see a guarded view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Any logged-in identity.
    LoggedIn,
    /// Citizens only; authorities are sent to their dashboard.
    Citizen,
    /// Authorities only; citizens are sent to their profile.
    Authority,
}

/// Guard decision for the current auth snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Identity not known yet.
    Pending,
    Granted,
    Redirect(&'static str),
}

pub fn check_access(state: &AuthState, requirement: Requirement) -> Access {
    if state.loading {
        return Access::Pending;
    }
    let Some(user) = state.user.as_ref() else {
        return Access::Redirect(LOGIN_PATH);
    };
    match requirement {
        Requirement::LoggedIn => Access::Granted,
        Requirement::Citizen if user.is_authority() => Access::Redirect(AUTHORITY_HOME),
        Requirement::Authority if user.is_citizen() => Access::Redirect(CITIZEN_HOME),
        Requirement::Citizen | Requirement::Authority => Access::Granted,
    }
}

/// Navigate away (replacing history) whenever auth settles on a visitor that
/// fails `requirement`.
pub fn install_access_redirect<F>(auth: RwSignal<AuthState>, requirement: Requirement, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Access::Redirect(path) = check_access(&auth.get(), requirement) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
