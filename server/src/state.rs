//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the in-memory session store, the shared HTTP client for upstream
//! calls, the upstream configuration, and the rate limiter. Everything is
//! `Arc`-backed or cheaply cloneable because Axum clones state per request.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::rate_limit::RateLimiter;
use crate::services::session::SessionUser;

/// Session tokens to users. Sessions are ephemeral: a restart signs
/// everyone out.
pub type SessionStore = Arc<RwLock<HashMap<String, SessionUser>>>;

/// Upstream transformation service configuration.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    /// Base URL of the transformation service, without a trailing slash.
    pub base_url: String,
}

impl UpstreamConfig {
    /// Read `TRANSFORM_BASE_URL` from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset or blank.
    pub fn from_env() -> Result<Self, String> {
        let raw = std::env::var("TRANSFORM_BASE_URL")
            .map_err(|_| "TRANSFORM_BASE_URL is not set".to_owned())?;
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self, String> {
        let base_url = raw.trim().trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err("TRANSFORM_BASE_URL is blank".to_owned());
        }
        Ok(Self { base_url })
    }

    /// Full URL of the HL7v2 → FHIR transformation operation.
    #[must_use]
    pub fn transform_url(&self) -> String {
        format!("{}{}", self.base_url, crate::routes::transform::TRANSFORM_PATH)
    }
}

/// Shared application state, injected into Axum handlers via the State
/// extractor.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub http: reqwest::Client,
    pub upstream: UpstreamConfig,
    pub rate_limiter: RateLimiter,
    /// Configured sign-in code; `None` disables login entirely.
    pub access_code: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: UpstreamConfig, access_code: Option<String>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            http: reqwest::Client::new(),
            upstream,
            rate_limiter: RateLimiter::new(),
            access_code,
        }
    }
}
