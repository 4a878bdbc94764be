//! Collapsible request/response diagnostics console.

use leptos::prelude::*;

use crate::net::types::{RequestInfo, ResponseInfo};

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "\u{2014}".to_owned())
}

/// Renders the typed metadata of the last exchange. Before the first call
/// both records are absent and the console shows a placeholder line.
#[component]
pub fn ExchangeConsole(
    #[prop(into)] request: Signal<Option<RequestInfo>>,
    #[prop(into)] response: Signal<Option<ResponseInfo>>,
) -> impl IntoView {
    view! {
        <details class="exchange-console">
            <summary class="exchange-console__summary">"Request / Response"</summary>
            <Show
                when=move || request.get().is_some()
                fallback=|| view! { <p class="exchange-console__empty">"No exchange recorded yet."</p> }
            >
                {move || {
                    request.get().map(|req| {
                        view! {
                            <div class="exchange-console__row">
                                <span class="exchange-console__label">"Request"</span>
                                <span class="exchange-console__value">
                                    {req.method} " " {req.url.clone()}
                                </span>
                                <span class="exchange-console__meta">{req.content_type}</span>
                            </div>
                        }
                    })
                }}
                {move || {
                    response.get().map(|res| {
                        let status = res
                            .status
                            .map_or_else(|| "no response".to_owned(), |code| code.to_string());
                        view! {
                            <div class="exchange-console__row">
                                <span class="exchange-console__label">"Response"</span>
                                <span class="exchange-console__value">
                                    {status} " " {optional(res.status_text.clone())}
                                </span>
                                <span class="exchange-console__meta">{optional(res.content_type.clone())}</span>
                            </div>
                        }
                    })
                }}
            </Show>
        </details>
    }
}
