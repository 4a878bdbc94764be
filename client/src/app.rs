//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{hl7v2_to_fhir::Hl7v2ToFhirPage, home::HomePage};
use crate::state::{auth::AuthState, samples::SampleHandoff, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let handoff = RwSignal::new(SampleHandoff::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(handoff);

    // Apply the stored theme once the app is live in a browser.
    Effect::new(move || {
        let dark = crate::util::dark_mode::init();
        ui.update(|u| u.dark_mode = dark);
    });

    // Probe the session; until this settles the UI treats the user as
    // unauthenticated and read-only.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| a.resolve(user));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/fhirbench.css"/>
        <Title text="fhirbench"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("hl7v2-to-fhir") view=Hl7v2ToFhirPage/>
            </Routes>
        </Router>
    }
}
