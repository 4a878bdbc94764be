//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The workbench never blocks navigation on authentication: unauthenticated
//! users can browse every screen, but editors render read-only and the
//! execute action stays disabled until a session exists. Components read
//! this state from context to decide which of those modes to render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current session user.
///
/// `loading` starts `true` because the app fires a session probe on mount;
/// gates treat a loading session the same as an absent one, so the UI stays
/// read-only until the probe settles.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// True once a session user is known.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Record the result of the session probe.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Drop the session locally (after a logout call).
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
