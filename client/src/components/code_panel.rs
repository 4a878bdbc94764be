//! Titled editor pane with optional upload / copy / download / clear /
//! execute actions.
//!
//! DESIGN
//! ======
//! One component serves both sides of the workspace: the input editor wires
//! `on_change` + `on_execute` + upload, the output editor is read-only with
//! copy + download. Actions are optional props; a pane renders only the
//! buttons it was given.

use leptos::prelude::*;

#[component]
pub fn CodePanel(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: Signal<String>,
    #[prop(into)] read_only: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
    #[prop(optional)] on_execute: Option<Callback<()>>,
    #[prop(optional)] execute_disabled: Option<Signal<bool>>,
    #[prop(optional)] upload_enabled: bool,
    #[prop(optional)] copy_enabled: bool,
    #[prop(optional)] download_name: Option<&'static str>,
    #[prop(optional)] panel_id: Option<&'static str>,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_input = move |ev: leptos::ev::Event| {
        if let Some(cb) = on_change {
            cb.run(event_target_value(&ev));
        }
    };

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let text = value.get_untracked();
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&text);
                copied.set(true);
            }
        }
    };

    let on_file_selected = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                leptos::task::spawn_local(async move {
                    let Ok(contents) = wasm_bindgen_futures::JsFuture::from(file.text()).await
                    else {
                        return;
                    };
                    if let (Some(text), Some(cb)) = (contents.as_string(), on_change) {
                        cb.run(text);
                    }
                });
            }
            // Allow re-uploading the same file later.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_download = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(name) = download_name {
                download_text(name, &value.get_untracked());
            }
        }
    };

    view! {
        <div class="code-panel" id=panel_id>
            <div class="code-panel__header">
                <span class="code-panel__title">{title}</span>
                <div class="code-panel__actions">
                    {upload_enabled
                        .then(|| {
                            view! {
                                <label class="btn code-panel__action code-panel__upload" title="Upload a file">
                                    "Upload"
                                    <input
                                        type="file"
                                        class="code-panel__file-input"
                                        accept=".txt,.hl7,.dat"
                                        on:change=on_file_selected
                                    />
                                </label>
                            }
                        })}
                    {copy_enabled
                        .then(|| {
                            view! {
                                <button class="btn code-panel__action" title="Copy to clipboard" on:click=on_copy>
                                    {move || if copied.get() { "Copied" } else { "Copy" }}
                                </button>
                            }
                        })}
                    {download_name
                        .map(|_| {
                            view! {
                                <button class="btn code-panel__action" title="Download" on:click=on_download>
                                    "Download"
                                </button>
                            }
                        })}
                    {on_clear
                        .map(|cb| {
                            view! {
                                <button class="btn code-panel__action" title="Clear" on:click=move |_| cb.run(())>
                                    "Clear"
                                </button>
                            }
                        })}
                    {on_execute
                        .map(|cb| {
                            let disabled = execute_disabled.unwrap_or_else(|| Signal::derive(|| false));
                            view! {
                                <button
                                    class="btn btn--primary code-panel__execute"
                                    title="Perform transformation"
                                    disabled=move || disabled.get()
                                    on:click=move |_| cb.run(())
                                >
                                    "Transform"
                                </button>
                            }
                        })}
                </div>
            </div>
            <textarea
                class="code-panel__editor"
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                readonly=move || read_only.get()
                spellcheck="false"
                aria-label=title
                on:input=on_input
            ></textarea>
        </div>
    }
}

/// Save `contents` as a local file via a Blob object URL.
#[cfg(feature = "hydrate")]
fn download_text(name: &str, contents: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/octet-stream");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Ok(anchor) = document.create_element("a") {
        let anchor: web_sys::HtmlAnchorElement = anchor.unchecked_into();
        anchor.set_href(&url);
        anchor.set_download(name);
        anchor.click();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
