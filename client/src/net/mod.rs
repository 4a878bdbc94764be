//! Networking modules for the BFF REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the session endpoints and the transformation call;
//! `types` defines the typed records the UI renders (session user,
//! request/response metadata).

pub mod api;
pub mod types;
