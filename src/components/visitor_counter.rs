//! Visitor Counter Component
//!
//! Renders the remotely-sourced visitor count, degrading to "N/A" on
//! any failure. Kicks off one fetch at mount; the backend owns the
//! actual count and increments it per request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::CounterConfig;
use crate::counter::{CounterModel, FetchTicket};

#[component]
pub fn VisitorCounter(config: CounterConfig) -> impl IntoView {
    let model = RwSignal::new(CounterModel::new(
        config.endpoint().map(str::to_string),
    ));

    let run_fetch = move |ticket: FetchTicket| {
        spawn_local(async move {
            let result = api::fetch_count(&ticket.url).await;
            if let Err(err) = &result {
                web_sys::console::warn_1(
                    &format!("Error fetching visitor count: {err}").into(),
                );
            }
            // Stale tickets are dropped inside complete()
            model.update(|m| {
                m.complete(&ticket, result);
            });
        });
    };

    // Initial fetch; placeholder mode issues no ticket
    if let Some(ticket) = model.try_update(|m| m.begin_fetch()).flatten() {
        run_fetch(ticket);
    }

    let state = move || model.with(|m| m.state());

    view! {
        <span
            id="visitor-count"
            class=move || state().css_class()
            title=move || state().tooltip()
        >
            {move || state().text()}
        </span>
    }
}
