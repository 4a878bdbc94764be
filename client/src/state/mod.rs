//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `samples`, `transform`, `ui`) so
//! individual components can depend on small focused models. The models are
//! plain structs with explicit transition methods; pages wrap them in
//! `RwSignal`s provided via context, which keeps the lifecycle logic
//! testable without a browser.

pub mod auth;
pub mod samples;
pub mod transform;
pub mod ui;
