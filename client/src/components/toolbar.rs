//! Application toolbar: brand, navigation, dark mode, session controls.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Toolbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::clear);
            });
        }
    };

    let session_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };

    view! {
        <header class="toolbar">
            <a class="toolbar__brand" href="/">"fhirbench"</a>
            <nav class="toolbar__nav">
                <a class="toolbar__nav-link" href="/hl7v2-to-fhir">"HL7v2 To FHIR"</a>
            </nav>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                title="Toggle dark mode"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
            >
                {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
            </button>

            <Show
                when=move || auth.get().is_authenticated()
                fallback=move || {
                    view! { <span class="toolbar__self toolbar__self--anonymous">"Not signed in"</span> }
                }
            >
                <span class="toolbar__self">{session_name}</span>
                <button class="btn toolbar__logout" title="Logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
