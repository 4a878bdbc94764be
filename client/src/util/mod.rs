//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (theme storage,
//! viewport tracking) and pure text processing (input sanitizing) from page
//! and component logic to improve reuse and testability.

pub mod dark_mode;
pub mod sanitize;
pub mod viewport;
