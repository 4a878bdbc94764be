//! Landing page: informational banner plus tool navigation.

use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::toolbar::Toolbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Toolbar/>
            <Banner/>
            <section class="home-page__tools">
                <h2 class="home-page__heading">"Tools"</h2>
                <div class="home-page__cards">
                    <a class="tool-card" href="/hl7v2-to-fhir">
                        <span class="tool-card__title">"HL7v2 To FHIR"</span>
                        <span class="tool-card__body">
                            "Convert pipe-delimited HL7v2 messages into FHIR R4 resources."
                        </span>
                    </a>
                </div>
            </section>
        </div>
    }
}
