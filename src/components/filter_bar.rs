//! Filter Bar Component
//!
//! One button per filter, the active one highlighted.

use leptos::prelude::*;

use crate::models::TodoFilter;

#[component]
pub fn FilterBar(
    #[prop(into)] active: Signal<TodoFilter>,
    on_change: impl Fn(TodoFilter) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {TodoFilter::OPTIONS.iter().map(|&filter| {
                let is_active = move || active.get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| on_change(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
