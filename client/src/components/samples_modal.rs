//! Modal sample browser for the current tool route.
//!
//! DESIGN
//! ======
//! Selection is staged locally and published to the shared hand-off channel
//! only when the user confirms with "Load Sample" — closing the modal any
//! other way publishes nothing. The sample list comes from the static
//! catalog keyed by the current route; routes without samples get an empty
//! list and no default staging.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::catalog::{self, CatalogSample};
use crate::state::samples::SampleHandoff;

#[component]
pub fn SamplesModal(on_close: Callback<()>) -> impl IntoView {
    let handoff = expect_context::<RwSignal<SampleHandoff>>();
    let pathname = use_location().pathname;

    let tool = move || catalog::for_path(&pathname.get());
    let label = move || tool().map_or("", |t| t.label);

    // Stage the first sample by default, when the route has any.
    let initial = catalog::for_path(&pathname.get_untracked())
        .and_then(|t| (!t.samples.is_empty()).then_some(0));
    let staged = RwSignal::new(initial);

    let staged_sample = move || -> Option<CatalogSample> {
        let index = staged.get()?;
        tool().and_then(|t| t.samples.get(index).copied())
    };

    let on_load = move |_| {
        let Some(t) = catalog::for_path(&pathname.get_untracked()) else {
            return;
        };
        let Some(index) = staged.get_untracked() else {
            return;
        };
        let Some(sample) = t.samples.get(index) else {
            return;
        };
        handoff.update(|h| h.publish(t.label, sample.to_sample()));
        on_close.run(());
    };

    let on_backdrop = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--samples"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__titlebar">
                    <h2 class="dialog__title">{label} " Samples"</h2>
                    <button class="btn dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "\u{00d7}"
                    </button>
                </div>

                <div class="samples-modal__body">
                    <div class="samples-modal__list-pane">
                        <ul class="samples-modal__list">
                            {move || {
                                tool()
                                    .map(|t| {
                                        t.samples
                                            .iter()
                                            .enumerate()
                                            .map(|(index, sample)| {
                                                view! {
                                                    <li class="samples-modal__item">
                                                        <button
                                                            class="samples-modal__item-button"
                                                            class:samples-modal__item-button--selected=move || staged.get() == Some(index)
                                                            on:click=move |_| staged.set(Some(index))
                                                        >
                                                            {sample.name}
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </ul>
                        <button
                            class="btn btn--primary samples-modal__load"
                            disabled=move || staged.get().is_none()
                            on:click=on_load
                        >
                            "Load Sample"
                        </button>
                    </div>

                    <div class="samples-modal__preview">
                        {move || {
                            staged_sample().map(|sample| {
                                view! {
                                    <div class="samples-modal__preview-header">{sample.name}</div>
                                    <pre class="samples-modal__preview-body">{sample.data}</pre>
                                }
                            })
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
