//! Sign-in overlay shown over the workspace while unauthenticated.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editors underneath stay visible but read-only; this overlay is the
//! only path to a session. Submitting posts the access code to the BFF and
//! resolves the shared auth state on success.

#[cfg(test)]
#[path = "login_overlay_test.rs"]
mod login_overlay_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Trim and require both fields before hitting the network.
fn validate_login_input(name: &str, code: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let code = code.trim();
    if name.is_empty() || code.is_empty() {
        return Err("Enter both a display name and an access code.");
    }
    Ok((name.to_owned(), code.to_owned()))
}

#[component]
pub fn LoginOverlay() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, code_value) = match validate_login_input(&name.get(), &code.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&name_value, &code_value).await {
                Ok(user) => {
                    auth.update(|a| a.resolve(Some(user)));
                    info.set(String::new());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, code_value);
        }
    };

    view! {
        <div class="login-overlay">
            <div class="login-overlay__card">
                <h2 class="login-overlay__title">"Sign in to run transformations"</h2>
                <p class="login-overlay__subtitle">
                    "Browsing is open; executing a conversion needs a session."
                </p>
                <form class="login-overlay__form" on:submit=on_submit>
                    <input
                        class="login-overlay__input"
                        type="text"
                        placeholder="Display name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-overlay__input"
                        type="password"
                        placeholder="Access code"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-overlay__submit" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-overlay__message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
