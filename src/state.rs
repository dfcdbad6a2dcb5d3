//! Shared host state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the `/api` forwarding handlers via the `State`
//! extractor. It is immutable after startup; cloning shares the pooled
//! `reqwest` client.

use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Remote blog API base, without trailing slash.
    pub upstream: Option<String>,
}

impl AppState {
    /// Build state from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS backend init).
    pub fn from_config(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;
        Ok(Self { http, upstream: config.api_upstream.clone() })
    }
}
