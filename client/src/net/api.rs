//! Submit actions for the club's registration and login endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin relay. Server-side (SSR): stubs returning an error since
//! submissions are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! One outbound call per submission, no retry. The API's answer — success
//! body or validation `detail` list alike — is merged into the returned
//! [`ActionResult`] for the form to render. Only transport failures surface
//! as `Err`, which the forms display inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde_json::Value;
use wire::{ActionResult, LoginCredentials, RegistrationFields, RegistrationRequest};

use crate::util::session::SessionContext;

#[cfg(feature = "hydrate")]
const REGISTER_ENDPOINT: &str = "/api/register/";
#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/api/login/";
#[cfg(any(test, feature = "hydrate"))]
const HOME_ROUTE: &str = "/";
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_ROUTE: &str = "/profile";
pub(crate) const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Statuses the registration API answers a created account with.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn registration_succeeded(status: u16) -> bool {
    matches!(status, 200 | 201 | 204)
}

/// A non-empty `access_token` in the fresh response body. Tokens carried
/// over from earlier submissions never re-trigger the login side effects.
#[cfg(any(test, feature = "hydrate"))]
fn response_access_token(body: &Value) -> Option<&str> {
    body.get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
}

/// Fold a registration response into the result state and request the
/// post-signup redirect on success. Pure over its inputs so the decision is
/// testable without a browser.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn apply_registration_outcome(
    prev: &ActionResult,
    status: u16,
    body: &Value,
    session: &impl SessionContext,
) -> ActionResult {
    let merged = prev.merged_with(body);
    if registration_succeeded(status) {
        session.redirect(HOME_ROUTE);
    }
    merged
}

/// Fold a login response into the result state; a fresh token is persisted
/// as the `access_token` cookie followed by the profile redirect.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn apply_login_outcome(
    prev: &ActionResult,
    body: &Value,
    session: &impl SessionContext,
) -> ActionResult {
    let merged = prev.merged_with(body);
    if let Some(token) = response_access_token(body) {
        session.set_cookie(ACCESS_TOKEN_COOKIE, token);
        session.redirect(PROFILE_ROUTE);
    }
    merged
}

/// Submit the register form: one JSON `POST /api/register/`.
///
/// On HTTP 200/201/204 the session is redirected to `/`; in every case the
/// response body is shallow-merged over `prev` and returned. A body that is
/// not a JSON object merges nothing.
///
/// # Errors
///
/// Returns an error string if the request cannot be built or the transport
/// fails. No local field validation happens — that is the server's job.
pub async fn submit_registration(
    prev: &ActionResult,
    fields: RegistrationFields,
    session: &impl SessionContext,
) -> Result<ActionResult, String> {
    let payload = RegistrationRequest::from_fields(fields);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        Ok(apply_registration_outcome(prev, status, &body, session))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (payload, prev, session);
        Err("not available on server".to_owned())
    }
}

/// Submit the login form: one urlencoded `POST /api/login/` with
/// `username`/`password` keys.
///
/// A response containing a non-empty `access_token` sets the cookie and
/// redirects to `/profile`; anything else is merged over `prev` and
/// returned for display.
///
/// # Errors
///
/// Returns an error string if the body cannot be encoded or the transport
/// fails.
pub async fn submit_login(
    prev: &ActionResult,
    credentials: LoginCredentials,
    session: &impl SessionContext,
) -> Result<ActionResult, String> {
    let form = credentials.form_body().map_err(|e| e.to_string())?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        Ok(apply_login_outcome(prev, &body, session))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, prev, session);
        Err("not available on server".to_owned())
    }
}
