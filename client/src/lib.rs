//! # client
//!
//! Leptos + WASM front end for the fhirbench healthcare transformation
//! workbench. Users paste, upload, or sample-load an HL7v2 message, send it
//! to the BFF for conversion, and inspect the returned FHIR resource next to
//! request/response diagnostics.
//!
//! This crate contains pages, components, shared reactive state, the static
//! sample catalog, and the REST helpers that talk to the BFF.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered shell into a live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
