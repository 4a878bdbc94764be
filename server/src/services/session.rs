//! In-memory session management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses random hex session tokens carried in an http-only cookie.
//! Sessions live in process memory only: the workbench stores nothing, so a
//! restart signing everyone out is acceptable and keeps the trust surface
//! small.

use rand::Rng;
use serde::Serialize;
use std::fmt::Write;
use uuid::Uuid;

use crate::state::SessionStore;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User identity attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    /// Unique user identifier, minted at login.
    pub id: Uuid,
    /// Display name chosen at login.
    pub name: String,
    /// Authentication method that created the session (`"access-code"`).
    pub auth_method: String,
}

/// Create a session for the given user, returning the token.
pub async fn create_session(store: &SessionStore, user: SessionUser) -> String {
    let token = generate_token();
    store.write().await.insert(token.clone(), user);
    token
}

/// Validate a session token and return the associated user.
pub async fn validate_session(store: &SessionStore, token: &str) -> Option<SessionUser> {
    store.read().await.get(token).cloned()
}

/// Remove a session. Unknown tokens are a no-op.
pub async fn remove_session(store: &SessionStore, token: &str) {
    store.write().await.remove(token);
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
