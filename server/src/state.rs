//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the loaded configuration and one shared HTTP client for the relay;
//! reqwest clients pool connections internally, so handlers clone the state
//! cheaply.

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: AppConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}
