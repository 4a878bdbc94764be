//! Two-tab switcher for the stacked narrow-viewport layout.

use leptos::prelude::*;

/// Renders one of two panes behind a tab bar. Presentation only: which pane
/// is visible has no effect on the request lifecycle.
#[component]
pub fn BasicTabs<F1, V1, F2, V2>(
    first_label: &'static str,
    second_label: &'static str,
    first: F1,
    second: F2,
) -> impl IntoView
where
    F1: Fn() -> V1 + Send + Sync + 'static,
    V1: IntoView + Send + 'static,
    F2: Fn() -> V2 + Send + Sync + 'static,
    V2: IntoView + Send + 'static,
{
    let active = RwSignal::new(0_usize);

    view! {
        <div class="basic-tabs">
            <div class="basic-tabs__bar" role="tablist">
                <button
                    role="tab"
                    class="basic-tabs__tab"
                    class:basic-tabs__tab--active=move || active.get() == 0
                    on:click=move |_| active.set(0)
                >
                    {first_label}
                </button>
                <button
                    role="tab"
                    class="basic-tabs__tab"
                    class:basic-tabs__tab--active=move || active.get() == 1
                    on:click=move |_| active.set(1)
                >
                    {second_label}
                </button>
            </div>
            <div class="basic-tabs__panel">
                {move || {
                    if active.get() == 0 { first().into_any() } else { second().into_any() }
                }}
            </div>
        </div>
    }
}
