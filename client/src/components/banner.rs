//! Static informational banner for the landing page.

use leptos::prelude::*;

/// Two-column landing panel describing the workbench. Purely
/// presentational: no state, no inputs.
#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <section class="banner">
            <div class="banner__column">
                <h2 class="banner__title">"HL7v2 in, FHIR out"</h2>
                <p class="banner__body">
                    "Paste a pipe-delimited HL7v2 message, or load one of the bundled \
                     samples, and convert it to a FHIR R4 resource without leaving the \
                     browser. The transformation runs on the connected backend service; \
                     results land side by side with your input for quick comparison."
                </p>
            </div>
            <div class="banner__column banner__column--divided">
                <h2 class="banner__title">"Built for integration work"</h2>
                <p class="banner__body">
                    "Every request surfaces its status code, content type, and server \
                     diagnostics, so mapping failures read like the interface errors \
                     they are. Nothing you submit is stored: sessions are ephemeral \
                     and each conversion stands alone."
                </p>
            </div>
        </section>
    }
}
