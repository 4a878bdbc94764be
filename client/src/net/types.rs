//! Typed records shared by the REST helpers and the UI.
//!
//! DESIGN
//! ======
//! Request/response metadata is captured as explicit records with optional
//! fields (`status: Option<u16>`, not a presence-checked property bag): a
//! transport failure produces a request record and no response record, and
//! the console renders exactly what is known.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authenticated session identity returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Authentication method that created the session (e.g. `"access-code"`).
    pub auth_method: String,
}

/// Metadata of an outbound request, for the diagnostics console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestInfo {
    pub method: &'static str,
    pub url: String,
    pub content_type: &'static str,
}

/// Metadata of a received response. All fields optional: a transport
/// failure yields no response at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseInfo {
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub content_type: Option<String>,
}

impl ResponseInfo {
    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_some_and(|s| (200..300).contains(&s))
    }
}

/// One completed exchange with the transformation endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpExchange {
    pub request: RequestInfo,
    pub response: ResponseInfo,
    /// Response body parsed as JSON, when it was JSON.
    pub body: Option<Value>,
    /// Raw response body text, always present (possibly empty).
    pub body_text: String,
}
