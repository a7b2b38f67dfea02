//! REST API helpers for the Fixity backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin so the
//! session cookie rides along and the host forwards `/api/*` to the backend.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result<_, String>` outputs instead of panics. Endpoints
//! that answer with the `{ success, error, redirect }` envelope have that body
//! decoded even on non-2xx statuses, so a rejected login surfaces the backend's
//! own message instead of a bare status code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AnalyticsPackage, ApiResponse, AuthorityRegistration, CitizenRegistration, CriPoint, CurrentUser, Issue,
    IssueStatus, LocationTree,
};
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, StatusUpdate};

const ME: &str = "/api/me";
const LOGIN: &str = "/api/login";
const LOGOUT: &str = "/api/logout";
const SEND_OTP: &str = "/api/send_otp";
const REGISTER_CITIZEN: &str = "/api/register_citizen";
const REGISTER_AUTHORITY: &str = "/api/register/authority";
#[cfg(feature = "hydrate")]
const SUBMIT_REPORT: &str = "/api/submit_report";
const MY_ISSUES: &str = "/api/my_issues";
const COMMUNITY_FEED: &str = "/api/community_feed";
const AUTHORITY_ISSUES: &str = "/api/authority_issues";
const UPDATE_STATUS: &str = "/api/update_status";
const LOCATIONS: &str = "/api/locations";
const ANALYTICS: &str = "/api/analytics";
const UPLOADS_PREFIX: &str = "/api/static/uploads/";

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

/// Public URL of an uploaded issue image.
pub fn upload_url(image_path: &str) -> String {
    format!("{UPLOADS_PREFIX}{}", image_path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn cri_data_endpoint(district: &str) -> String {
    format!("/api/get_cri_data/{}", encode_path_segment(district))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(endpoint: &str, status: u16) -> String {
    format!("{endpoint} failed: {status}")
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
#[cfg(any(test, feature = "hydrate"))]
fn encode_path_segment(raw: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(url, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<ApiResponse, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope(url, &resp).await
}

#[cfg(feature = "hydrate")]
async fn read_envelope(url: &str, resp: &gloo_net::http::Response) -> Result<ApiResponse, String> {
    match resp.json::<ApiResponse>().await {
        Ok(body) => Ok(body),
        Err(_) if !resp.ok() => Err(request_failed_message(url, resp.status())),
        Err(e) => Err(e.to_string()),
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated identity from `/api/me`.
/// Returns `None` if nobody is logged in, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<CurrentUser> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<Option<CurrentUser>>(ME).await.ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ME;
        None
    }
}

/// Log in via `POST /api/login`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response is unreadable.
pub async fn login(email: &str, password: &str) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        post_json(LOGIN, &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, LOGIN);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// End the session via `POST /api/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails; callers are free to ignore it.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(LOGOUT, resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = LOGOUT;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Request a registration OTP via `POST /api/send_otp`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response is unreadable.
pub async fn send_otp(email: &str) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(SEND_OTP, &serde_json::json!({ "email": email })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, SEND_OTP);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Register a citizen account via `POST /api/register_citizen`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response is unreadable.
pub async fn register_citizen(form: &CitizenRegistration) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(REGISTER_CITIZEN, form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, REGISTER_CITIZEN);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Register an authority account via `POST /api/register/authority`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response is unreadable.
pub async fn register_authority(form: &AuthorityRegistration) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(REGISTER_AUTHORITY, form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, REGISTER_AUTHORITY);
        Err(NOT_AVAILABLE.to_owned())
    }
}

// =============================================================================
// ISSUES
// =============================================================================

/// Submit a report as `multipart/form-data` via `POST /api/submit_report`.
///
/// Browser-only: the image is a DOM `File` taken from the form's file input.
///
/// # Errors
///
/// Returns an error string if the form cannot be built or the request fails.
#[cfg(feature = "hydrate")]
pub async fn submit_report(fields: &[(&'static str, String)], image: Option<web_sys::File>) -> Result<ApiResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "form data unavailable".to_owned())?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| format!("could not attach field {name}"))?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", &file, &file.name())
            .map_err(|_| "could not attach image".to_owned())?;
    }
    let resp = gloo_net::http::Request::post(SUBMIT_REPORT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope(SUBMIT_REPORT, &resp).await
}

/// Fetch the logged-in citizen's reports from `/api/my_issues`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_my_issues() -> Result<Vec<Issue>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(MY_ISSUES).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = MY_ISSUES;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch the public issue feed from `/api/community_feed`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_community_feed() -> Result<Vec<Issue>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(COMMUNITY_FEED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = COMMUNITY_FEED;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch issues in the logged-in authority's jurisdiction from `/api/authority_issues`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_authority_issues() -> Result<Vec<Issue>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(AUTHORITY_ISSUES).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = AUTHORITY_ISSUES;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Move an issue to `status` via `POST /api/update_status`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response is unreadable.
pub async fn update_status(issue_id: i64, status: IssueStatus) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(UPDATE_STATUS, &StatusUpdate { issue_id, status }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (issue_id, status, UPDATE_STATUS);
        Err(NOT_AVAILABLE.to_owned())
    }
}

// =============================================================================
// MAP + ANALYTICS
// =============================================================================

/// Fetch block-level CRI points for a district from `/api/get_cri_data/{district}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_cri_data(district: &str) -> Result<Vec<CriPoint>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&cri_data_endpoint(district)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = district;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch the state -> district -> block hierarchy from `/api/locations`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_locations() -> Result<LocationTree, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(LOCATIONS).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = LOCATIONS;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch the analytics console package from `/api/analytics`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_analytics() -> Result<AnalyticsPackage, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ANALYTICS).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ANALYTICS;
        Err(NOT_AVAILABLE.to_owned())
    }
}
