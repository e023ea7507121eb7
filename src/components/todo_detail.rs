//! Todo Detail Component
//!
//! Fetches one todo whenever the id changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TodoApi;
use crate::detail::{DetailContent, DetailSignals};
use crate::fetch::fetch_todo_detail;
use crate::lifecycle::{Gated, RequestGeneration, StaleResponses, ViewLifetime};

#[component]
pub fn TodoDetail(
    api: TodoApi,
    #[prop(into)] todo_id: Signal<u32>,
    /// Handling of responses to superseded requests
    #[prop(optional)] stale_responses: StaleResponses,
) -> impl IntoView {
    let state = DetailSignals::new();

    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    let generation = RequestGeneration::default();
    Effect::new(move |_| {
        let id = todo_id.get();
        let updater = Gated::new(state, lifetime.clone()).with_ticket(generation.issue(), stale_responses);
        let api = api.clone();
        log::debug!("[TodoDetail] Todo id changed to {}", id);
        spawn_local(async move {
            fetch_todo_detail(&api, id, &updater).await;
        });
    });

    let content = Memo::new(move |_| state.snapshot().content());

    view! {
        <div class="todo-detail">
            {move || match content.get() {
                DetailContent::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                DetailContent::Error(message) => view! {
                    <div class="error">{message}</div>
                }.into_any(),
                DetailContent::Loaded(lines) => lines
                    .into_iter()
                    .map(|line| view! { <p>{line}</p> })
                    .collect_view()
                    .into_any(),
                DetailContent::Empty => view! {
                    <p class="empty">"No todo loaded"</p>
                }.into_any(),
            }}
        </div>
    }
}
