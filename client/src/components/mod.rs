//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render workbench chrome and the editor surfaces while
//! reading/writing shared state from Leptos context providers. Screen
//! lifecycle rules live in `state`; components stay presentational.

pub mod banner;
pub mod basic_tabs;
pub mod code_panel;
pub mod error_display;
pub mod exchange_console;
pub mod login_overlay;
pub mod response_alert;
pub mod samples_modal;
pub mod toolbar;
