//! `/api` forwarding to the Fixity backend.
//!
//! DESIGN
//! ======
//! The browser talks to a single origin. Every `/api/*` request is replayed
//! against `FIXITY_BACKEND_URL` with the same method, path, query and body.
//! Only the headers the backend session needs travel in each direction, so
//! hop-by-hop and host headers never leak across.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE, COOKIE, HeaderName, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body forwarded; report uploads carry a photo.
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

const REQUEST_HEADERS: [HeaderName; 3] = [COOKIE, CONTENT_TYPE, ACCEPT];
const RESPONSE_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, SET_COOKIE, LOCATION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body could not be read: {0}")]
    Body(String),
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Backend URL for an incoming request: origin plus the incoming path and query.
pub fn target_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", backend_url.trim_end_matches('/'))
}

/// Copy only the `allowed` headers, keeping repeated values.
pub fn filter_headers(headers: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in headers.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Axum handler for `/api/{*rest}`.
pub async fn forward(State(state): State<AppState>, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    match relay(&state, req).await {
        Ok(response) => {
            tracing::debug!(%method, %path, status = %response.status(), "proxied");
            response
        }
        Err(e) => {
            tracing::warn!(%method, %path, error = %e, "proxy failed");
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method, target_url(&state.backend_url, &parts.uri))
        .headers(filter_headers(&parts.headers, &REQUEST_HEADERS))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers(), &RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
