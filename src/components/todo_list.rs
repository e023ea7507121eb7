//! Todo List Component
//!
//! Fetches the collection once on mount and renders it through the
//! active filter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::TodoApi;
use crate::components::{FilterBar, TodoRow};
use crate::fetch::fetch_todos;
use crate::lifecycle::{Gated, ViewLifetime};
use crate::models::TodoFilter;
use crate::store::{store_select_filter, ListContent, ListState, ListStateStoreFields, ListStore};

#[component]
pub fn TodoList(
    api: TodoApi,
    /// Called with the id of the activated row
    #[prop(into)] on_select_todo: Callback<u32>,
) -> impl IntoView {
    let store: ListStore = Store::new(ListState::default());

    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    // Load on mount
    let updater = Gated::new(store, lifetime);
    Effect::new(move |_| {
        let api = api.clone();
        let updater = updater.clone();
        log::debug!("[TodoList] Fetching {}", api.collection_url());
        spawn_local(async move {
            fetch_todos(&api, &updater).await;
        });
    });

    let content = Memo::new(move |_| store.with(|state| state.content()));
    let summary = move || store.with(|state| state.summary());
    let active_filter = Signal::derive(move || store.filter().get());
    let on_filter = move |filter: TodoFilter| store_select_filter(&store, filter);

    view! {
        <div class="todo-list-view">
            <FilterBar active=active_filter on_change=on_filter />

            {move || match content.get() {
                ListContent::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                ListContent::Error(message) => view! {
                    <div class="error">"Error: " {message}</div>
                }.into_any(),
                ListContent::Rows(rows) => view! {
                    <ul class="todo-list">
                        {rows.into_iter()
                            .map(|todo| view! { <TodoRow todo=todo on_select=on_select_todo /> })
                            .collect_view()}
                    </ul>
                    <p class="todo-count">{summary}</p>
                }.into_any(),
            }}
        </div>
    }
}
