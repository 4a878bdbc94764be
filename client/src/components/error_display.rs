//! Error banner for failed transformation calls.

use leptos::prelude::*;

/// Shows the failure status code and, when one could be extracted, the
/// server's diagnostic message. A transport failure has neither; the banner
/// still renders so the user knows the call did not complete.
#[component]
pub fn ErrorDisplay(
    #[prop(into)] status: Signal<Option<u16>>,
    #[prop(into)] message: Signal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let status_label = move || {
        status
            .get()
            .map_or_else(|| "no response".to_owned(), |code| code.to_string())
    };

    view! {
        <div class="error-display" role="alert">
            <div class="error-display__heading">
                <span class="error-display__label">"Transformation failed"</span>
                <span class="error-display__status">{status_label}</span>
                <button
                    class="btn error-display__close"
                    title="Dismiss"
                    on:click=move |_| on_close.run(())
                >
                    "\u{00d7}"
                </button>
            </div>
            <Show when=move || message.get().is_some()>
                <p class="error-display__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
