//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (hand-off consumption, the
//! in-flight call, timers, layout switching) and delegates rendering
//! details to `components`.

pub mod hl7v2_to_fhir;
pub mod home;
