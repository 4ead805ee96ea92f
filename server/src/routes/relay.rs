//! Submission relay to the upstream club API.
//!
//! The browser forms post same-origin; these handlers forward the body to
//! the configured API base and pass the upstream answer through untouched —
//! status and payload alike — so the client's result merge sees exactly
//! what the API said. One outbound call per submission, no retry.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub(crate) const REGISTER_PATH: &str = "/api/register/";
pub(crate) const LOGIN_PATH: &str = "/api/login/";

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Error relaying a submission upstream.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The upstream API could not be reached or did not answer.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "relay failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Join the upstream base with a relay path.
pub(crate) fn upstream_url(api_base: &str, path: &str) -> String {
    format!("{api_base}{path}")
}

/// Content type forwarded upstream. Submissions default to JSON; the login
/// form's urlencoded type passes through unchanged.
pub(crate) fn forwarded_content_type(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_owned()
}

/// Map an upstream status onto the relayed response.
pub(crate) fn passthrough_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

/// `POST /api/register/` — forward the JSON registration body.
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    forward(&state, REGISTER_PATH, &headers, body).await
}

/// `POST /api/login/` — forward the urlencoded credential body.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    forward(&state, LOGIN_PATH, &headers, body).await
}

async fn forward(
    state: &AppState,
    path: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    let url = upstream_url(&state.config.api_base, path);
    let content_type = forwarded_content_type(headers);

    let upstream = state
        .http
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, content_type)
        .body(body.to_vec())
        .send()
        .await?;

    let status = passthrough_status(upstream.status().as_u16());
    let upstream_content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_owned();
    let payload = upstream.bytes().await?;

    tracing::debug!(%url, status = status.as_u16(), "relayed submission");
    Ok((
        status,
        [(header::CONTENT_TYPE, upstream_content_type)],
        payload.to_vec(),
    )
        .into_response())
}
