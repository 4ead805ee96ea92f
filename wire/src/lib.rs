//! Shared payload model for the club API boundary.
//!
//! This crate owns the request bodies the front end sends to the remote
//! registration/login API and the opaque result state threaded back into the
//! forms. Both `client` and `server` depend on it so the relay and the UI
//! agree on one schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Error returned when a payload cannot be encoded for the wire.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The login credentials could not be urlencoded.
    #[error("failed to encode login form body: {0}")]
    FormEncode(#[from] serde_urlencoded::ser::Error),
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Profile values the register form does not collect yet. The upstream API
/// requires them, so registration sends these stand-ins for every account.
pub mod placeholders {
    pub const BIO: &str = "Experienced software developer specializing in web applications.";
    pub const PROFILE_PICTURE_URL: &str = "https://example.com/profiles/john.jpg";
    pub const LINKEDIN_PROFILE_URL: &str = "https://linkedin.com/in/johndoe";
    pub const GITHUB_PROFILE_URL: &str = "https://github.com/johndoe";
    pub const ROLE: &str = "ANONYMOUS";
}

/// User-supplied inputs of the register form, as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub nickname: String,
    pub password: String,
}

/// JSON body of `POST /api/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub nickname: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub profile_picture_url: String,
    pub linkedin_profile_url: String,
    pub github_profile_url: String,
    pub role: String,
    pub password: String,
}

impl RegistrationRequest {
    /// Combine form inputs with the placeholder profile values.
    #[must_use]
    pub fn from_fields(fields: RegistrationFields) -> Self {
        Self {
            email: fields.email,
            nickname: fields.nickname,
            first_name: fields.first_name,
            last_name: fields.last_name,
            bio: placeholders::BIO.to_owned(),
            profile_picture_url: placeholders::PROFILE_PICTURE_URL.to_owned(),
            linkedin_profile_url: placeholders::LINKEDIN_PROFILE_URL.to_owned(),
            github_profile_url: placeholders::GITHUB_PROFILE_URL.to_owned(),
            role: placeholders::ROLE.to_owned(),
            password: fields.password,
        }
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Inputs of the login form. The API expects the email under a `username`
/// key, which the serde rename handles at encode time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    #[serde(rename = "username")]
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    /// Encode as an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::FormEncode`] if urlencoding fails.
    pub fn form_body(&self) -> Result<String, PayloadError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

// =============================================================================
// ACTION RESULT
// =============================================================================

/// Everything the API said across submissions, merged shallowly.
///
/// There is no fixed schema: the forms render whatever keys the server
/// returned, so this stays an opaque string-key map. Reads are pure, which
/// keeps re-rendering the same result idempotent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionResult(Map<String, Value>);

impl ActionResult {
    /// Shallow-merge a response body over this result.
    ///
    /// Keys in `response` win over prior keys. A non-object response merges
    /// nothing, so a malformed body leaves the previous state intact.
    #[must_use]
    pub fn merged_with(&self, response: &Value) -> Self {
        let mut merged = self.0.clone();
        if let Value::Object(fields) = response {
            for (key, value) in fields {
                merged.insert(key.clone(), value.clone());
            }
        }
        Self(merged)
    }

    /// Look up a single key of the result.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the API has said anything yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `msg` strings of the optional `detail` error list.
    ///
    /// Records without a string `msg` are skipped; an absent or non-list
    /// `detail` yields no messages.
    #[must_use]
    pub fn detail_messages(&self) -> Vec<String> {
        let Some(Value::Array(records)) = self.0.get("detail") else {
            return Vec::new();
        };
        records
            .iter()
            .filter_map(|record| record.get("msg").and_then(Value::as_str))
            .map(str::to_owned)
            .collect()
    }

    /// The `detail` messages joined for inline display.
    #[must_use]
    pub fn feedback_line(&self) -> String {
        self.detail_messages().join(", ")
    }

    /// A non-empty `access_token` string, if the API returned one.
    /// An empty token counts as absent.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.0
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }

    /// Raw JSON text of the whole result, for the dump-everything rendering
    /// variant. Key order is the map's stable iteration order, so the output
    /// is deterministic for a given result.
    #[must_use]
    pub fn dump(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}
