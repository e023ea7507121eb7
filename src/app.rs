//! Todo Viewer App
//!
//! Parent shell: owns the selected todo and switches between list and
//! detail views.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{ReqwestClient, TodoApi};
use crate::components::{BackButton, TodoDetail, TodoList};
use crate::config::AppConfig;
use crate::context::{retained_selection, AppContext};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = TodoApi::new(&config.api_base_url, Rc::new(ReqwestClient::new()));
    log::info!("[App] Reading todos from {}", api.base_url());
    let api = StoredValue::new_local(api);
    let stale_responses = config.stale_responses;

    let (selected_todo, set_selected_todo) = signal::<Option<u32>>(None);
    let ctx = AppContext::new((selected_todo, set_selected_todo));
    provide_context(ctx);

    // Last selected id; going back to the list leaves it unchanged
    let retained = Memo::new(move |prev: Option<&Option<u32>>| {
        retained_selection(ctx.selected_todo.get(), prev.copied().flatten())
    });

    view! {
        <div class="app-layout">
            <h1>"Todos"</h1>
            <Show
                when=move || ctx.selected_todo.get().is_some()
                fallback=move || view! {
                    <TodoList
                        api=api.get_value()
                        on_select_todo=move |id: u32| ctx.select(id)
                    />
                }
            >
                <BackButton />
                <TodoDetail
                    api=api.get_value()
                    todo_id=Signal::derive(move || retained.get().unwrap_or_default())
                    stale_responses=stale_responses
                />
            </Show>
        </div>
    }
}
