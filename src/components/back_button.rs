//! Back Button Component
//!
//! Returns from the detail view to the list.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn BackButton() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button class="back-btn" on:click=move |_| ctx.clear_selection()>
            "Back to list"
        </button>
    }
}
