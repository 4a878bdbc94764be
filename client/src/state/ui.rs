//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`,
//! `transform`) so rendering controls can evolve independently of the
//! request lifecycle. Dark mode is the only app-wide chrome flag; modal
//! open/closed flags stay local to the page that owns the modal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// App-wide UI state provided via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
