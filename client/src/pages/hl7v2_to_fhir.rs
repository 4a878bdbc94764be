//! HL7v2 → FHIR tool screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Orchestrates the input/output editors, the sample hand-off, the single
//! in-flight transformation call, and the responsive layout switch. All
//! lifecycle rules live in `state::transform`; this module wires browser
//! events and async completions into that model.

#[cfg(test)]
#[path = "hl7v2_to_fhir_test.rs"]
mod hl7v2_to_fhir_test;

use leptos::prelude::*;

use crate::catalog::HL7V2_TO_FHIR_LABEL;
use crate::components::basic_tabs::BasicTabs;
use crate::components::code_panel::CodePanel;
use crate::components::error_display::ErrorDisplay;
use crate::components::exchange_console::ExchangeConsole;
use crate::components::login_overlay::LoginOverlay;
use crate::components::response_alert::ResponseAlert;
use crate::components::samples_modal::SamplesModal;
use crate::components::toolbar::Toolbar;
use crate::net::types::{HttpExchange, RequestInfo, ResponseInfo};
use crate::state::auth::AuthState;
use crate::state::samples::SampleHandoff;
use crate::state::transform::TransformScreen;
use crate::util::{sanitize, viewport};

/// How long the "Sample Loaded" alert stays up before auto-dismissing.
const SAMPLE_ALERT_MILLIS: u64 = 2_000;

const INPUT_PLACEHOLDER: &str = "Paste or edit an HL7 message here...";
const OUTPUT_PLACEHOLDER: &str = "FHIR Resource will be displayed here...";
const LOADING_PLACEHOLDER: &str = "Loading...";

/// Consume a pending hand-off for this screen, if any.
///
/// Consuming clears the shared slot synchronously, so no other screen can
/// observe the same hand-off. Returns `true` when a sample was loaded (the
/// caller schedules the alert auto-dismiss).
fn consume_handoff(handoff: &mut SampleHandoff, screen: &mut TransformScreen) -> bool {
    match handoff.take(HL7V2_TO_FHIR_LABEL) {
        Some(sample) => {
            screen.load_sample(&sample.data);
            true
        }
        None => false,
    }
}

/// Output pane placeholder for the current loading state.
fn output_placeholder(is_loading: bool) -> &'static str {
    if is_loading { LOADING_PLACEHOLDER } else { OUTPUT_PLACEHOLDER }
}

/// Apply a finished exchange to the screen model.
fn apply_exchange(screen: &mut TransformScreen, exchange: &HttpExchange) {
    let status = exchange.response.status.unwrap_or_default();
    if exchange.response.is_success() {
        match &exchange.body {
            Some(body) => screen.complete_success(status, body),
            None => screen.complete_success_text(status, &exchange.body_text),
        }
    } else {
        screen.complete_failure(status, exchange.body.as_ref(), &exchange.body_text);
    }
}

#[component]
pub fn Hl7v2ToFhirPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let handoff = expect_context::<RwSignal<SampleHandoff>>();

    let screen = RwSignal::new(TransformScreen::default());
    let request_info = RwSignal::new(None::<RequestInfo>);
    let response_info = RwSignal::new(None::<ResponseInfo>);
    let samples_open = RwSignal::new(false);
    let width = viewport::use_window_width();

    // Cleared on unmount so late timers and responses are not applied.
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Consume a staged sample on mount and whenever one appears later.
    {
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        Effect::new(move || {
            if !handoff.get().pending_for(HL7V2_TO_FHIR_LABEL) {
                return;
            }
            let loaded = handoff
                .try_update(|h| {
                    screen
                        .try_update(|s| consume_handoff(h, s))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !loaded {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        SAMPLE_ALERT_MILLIS,
                    ))
                    .await;
                    if alive.load(std::sync::atomic::Ordering::Relaxed) {
                        let _ = screen.try_update(TransformScreen::dismiss_alert);
                    }
                });
            }
        });
    }

    let on_execute = {
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        Callback::new(move |()| {
            if !auth.get_untracked().is_authenticated() {
                return;
            }
            let clean = sanitize::strip_markup(&screen.get_untracked().input);
            let started = screen
                .try_update(|s| {
                    s.set_input(clean.clone());
                    s.begin_request()
                })
                .unwrap_or(false);
            if !started {
                return;
            }
            request_info.set(None);
            response_info.set(None);

            #[cfg(feature = "hydrate")]
            {
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::transform_hl7v2(&clean).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(exchange) => {
                            let _ = request_info.try_set(Some(exchange.request.clone()));
                            let _ = response_info.try_set(Some(exchange.response.clone()));
                            let _ = screen.try_update(|s| apply_exchange(s, &exchange));
                        }
                        Err(err) => {
                            log::warn!("transform call failed: {err}");
                            let _ = screen.try_update(TransformScreen::complete_transport_failure);
                        }
                    }
                });
            }
        })
    };

    let input_value = Signal::derive(move || screen.get().input);
    let output_value = Signal::derive(move || screen.get().output);
    let input_hint = Signal::derive(|| INPUT_PLACEHOLDER.to_owned());
    let output_hint =
        Signal::derive(move || output_placeholder(screen.get().is_loading).to_owned());
    let input_read_only = Signal::derive(move || !auth.get().is_authenticated());
    let output_read_only = Signal::derive(|| true);
    let execute_disabled =
        Signal::derive(move || !auth.get().is_authenticated() || screen.get().is_loading);

    let on_input_change = Callback::new(move |value: String| screen.update(|s| s.set_input(value)));
    let on_input_clear = Callback::new(move |()| screen.update(TransformScreen::clear_input));
    let on_output_clear = Callback::new(move |()| screen.update(TransformScreen::clear_output));

    let input_editor = move || {
        view! {
            <CodePanel
                title="HL7 Message"
                value=input_value
                placeholder=input_hint
                read_only=input_read_only
                on_change=on_input_change
                on_clear=on_input_clear
                on_execute=on_execute
                execute_disabled=execute_disabled
                upload_enabled=true
                panel_id="hl7v2-to-fhir-input"
            />
        }
    };
    let output_editor = move || {
        view! {
            <CodePanel
                title="FHIR Resource"
                value=output_value
                placeholder=output_hint
                read_only=output_read_only
                on_clear=on_output_clear
                copy_enabled=true
                download_name="hl7v2-to-fhir-output.json"
                panel_id="hl7v2-to-fhir-output"
            />
        }
    };
    let error_section = move || {
        view! {
            <Show when=move || screen.get().is_error>
                <ErrorDisplay
                    status=Signal::derive(move || screen.get().status_code)
                    message=Signal::derive(move || screen.get().display_message())
                    on_close=Callback::new(move |()| screen.update(TransformScreen::dismiss_error))
                />
            </Show>
        }
    };

    view! {
        <div class="tool-page" id="hl7v2-to-fhir">
            <Toolbar/>

            <div class="tool-page__titlebar">
                <h1 class="tool-page__title">"HL7v2 To FHIR"</h1>
                <button class="btn tool-page__samples" on:click=move |_| samples_open.set(true)>
                    "Samples"
                </button>
            </div>

            <Show when=move || screen.get().alert_open>
                <ResponseAlert
                    message="Sample Loaded"
                    on_close=Callback::new(move |()| screen.update(TransformScreen::dismiss_alert))
                />
            </Show>

            <Show when=move || samples_open.get()>
                <SamplesModal on_close=Callback::new(move |()| samples_open.set(false))/>
            </Show>

            <div class="tool-page__workspace">
                <Show when=move || !auth.get().loading && !auth.get().is_authenticated()>
                    <LoginOverlay/>
                </Show>
                <Show
                    when=move || viewport::is_wide(width.get())
                    fallback=move || {
                        view! {
                            <div class="tool-page__stacked">
                                {error_section()}
                                <BasicTabs
                                    first_label="HL7 Message"
                                    second_label="FHIR Resource"
                                    first=input_editor
                                    second=output_editor
                                />
                            </div>
                        }
                    }
                >
                    <div class="tool-page__panes">
                        <div class="tool-page__pane tool-page__pane--input">{input_editor()}</div>
                        <div class="tool-page__pane tool-page__pane--output">
                            {error_section()}
                            {output_editor()}
                        </div>
                    </div>
                </Show>
            </div>

            <ExchangeConsole request=request_info response=response_info/>
        </div>
    }
}
