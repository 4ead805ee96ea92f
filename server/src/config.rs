//! Environment configuration for the front-end host.
//!
//! Only two knobs: the listen port and the upstream API base the relay
//! forwards submissions to. Missing variables fall back to the
//! local-development defaults; `.env` files are honored via `dotenvy` in
//! `main`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Error loading the runtime configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` was set but does not parse as a port number.
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Runtime configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub api_base: String,
}

impl AppConfig {
    /// Load from `PORT` and `API_BASE`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        let api_base = std::env::var("API_BASE")
            .map_or_else(|_| DEFAULT_API_BASE.to_owned(), |raw| normalize_api_base(&raw));
        Ok(Self { port, api_base })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))
}

/// Trim trailing slashes so joining with `/api/...` paths cannot double up.
fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
