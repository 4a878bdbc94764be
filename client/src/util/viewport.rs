//! Window width tracking for responsive layout.
//!
//! The tool workspace switches between a stacked tabbed layout and a
//! side-by-side dual-pane layout at a fixed breakpoint. This module owns
//! the reactive width signal and the `resize` subscription, including its
//! removal when the owning component is torn down.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

/// Dual-pane layout applies at and above this width.
pub const WIDE_BREAKPOINT_PX: f64 = 900.0;

/// Width assumed during SSR, before the browser reports a real value.
const DEFAULT_WIDTH_PX: f64 = 1280.0;

/// True when `width` should use the side-by-side layout.
#[must_use]
pub fn is_wide(width: f64) -> bool {
    width >= WIDE_BREAKPOINT_PX
}

/// Reactive window inner width.
///
/// Registers a `resize` listener on mount; the listener is unregistered in
/// `on_cleanup` so a dismounted screen never observes further events.
pub fn use_window_width() -> RwSignal<f64> {
    let width = RwSignal::new(current_width());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let _ = width.try_set(current_width());
        });
        on_cleanup(move || handle.remove());
    }

    width
}

fn current_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_WIDTH_PX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_WIDTH_PX
    }
}
