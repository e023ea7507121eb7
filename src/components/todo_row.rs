//! Todo Row Component
//!
//! Single row in the todo list.

use leptos::prelude::*;

use crate::models::Todo;

/// A row showing title and completion glyph; clicking selects the todo
#[component]
pub fn TodoRow(
    todo: Todo,
    on_select: Callback<u32>,
) -> impl IntoView {
    let id = todo.id;
    let glyph = todo.glyph();

    view! {
        <li
            class=if todo.completed { "todo-row completed" } else { "todo-row" }
            on:click=move |_| on_select.run(id)
        >
            <span class="todo-glyph">{glyph}</span>
            <span class="todo-title">{todo.title}</span>
        </li>
    }
}
