//! Transient dismissible status banner.

use leptos::prelude::*;

/// Success banner shown after a sample loads. The owning page auto-dismisses
/// it after a fixed delay; the close button dismisses it sooner.
#[component]
pub fn ResponseAlert(message: &'static str, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="response-alert response-alert--success" role="status">
            <span class="response-alert__message">{message}</span>
            <button
                class="btn response-alert__close"
                title="Dismiss"
                on:click=move |_| on_close.run(())
            >
                "\u{00d7}"
            </button>
        </div>
    }
}
