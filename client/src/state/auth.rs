//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by the root `App` as `RwSignal<AuthState>`. Route guards, the
//! dashboard chrome and role-aware pages all read it; login/logout flows write
//! it through the async helpers below.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{ApiResponse, CurrentUser, Role};

/// Authentication state tracking the current identity and loading status.
///
/// `loading` starts `true` and flips to `false` after the first `/api/me`
/// round-trip, so guards can tell "not yet known" from "logged out".
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Settled state holding `user`.
    pub fn loaded(user: Option<CurrentUser>) -> Self {
        Self { user, loading: false }
    }

    /// Role used for dashboard chrome. Guests get the citizen layout.
    pub fn layout_role(&self) -> Role {
        self.user.as_ref().map_or(Role::Citizen, CurrentUser::role)
    }

    pub fn is_authority(&self) -> bool {
        self.user.as_ref().is_some_and(CurrentUser::is_authority)
    }

    pub fn is_citizen(&self) -> bool {
        self.user.as_ref().is_some_and(CurrentUser::is_citizen)
    }
}

/// Result of a login attempt, as the login page needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; navigate to `redirect`.
    Success { redirect: String },
    /// Rejected or failed; show the message.
    Failure(String),
}

/// Map the raw login response onto an outcome.
///
/// A response counts as success only when it names a redirect target.
pub fn interpret_login(response: Result<ApiResponse, String>) -> LoginOutcome {
    match response {
        Ok(ApiResponse { redirect: Some(redirect), .. }) => LoginOutcome::Success { redirect },
        Ok(ApiResponse { error, .. }) => LoginOutcome::Failure(error.unwrap_or_else(|| "Login failed".to_owned())),
        Err(message) if message.trim().is_empty() => LoginOutcome::Failure("Login failed".to_owned()),
        Err(message) => LoginOutcome::Failure(message),
    }
}

/// Re-read the current identity from the backend. Always settles `loading`.
pub async fn refresh_user(auth: RwSignal<AuthState>) {
    let user = api::fetch_current_user().await;
    auth.set(AuthState::loaded(user));
}

/// Log in and, on success, refresh the cached identity before returning.
pub async fn login(auth: RwSignal<AuthState>, email: String, password: String) -> LoginOutcome {
    let outcome = interpret_login(api::login(&email, &password).await);
    if matches!(outcome, LoginOutcome::Success { .. }) {
        refresh_user(auth).await;
    }
    outcome
}

/// Log out. The cached identity is cleared only when the backend confirms;
/// failures are ignored.
pub async fn logout(auth: RwSignal<AuthState>) {
    if api::logout().await.is_ok() {
        auth.update(|a| a.user = None);
    }
}
