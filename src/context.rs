//! Application Context
//!
//! Navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Todo shown in the detail view (None = list) - read
    pub selected_todo: ReadSignal<Option<u32>>,
    /// Todo shown in the detail view (None = list) - write
    set_selected_todo: WriteSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(selected_todo: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>)) -> Self {
        Self {
            selected_todo: selected_todo.0,
            set_selected_todo: selected_todo.1,
        }
    }

    /// Show the detail view for a todo
    pub fn select(&self, id: u32) {
        log::debug!("[App] Selected todo {}", id);
        self.set_selected_todo.set(Some(id));
    }

    /// Go back to the list
    pub fn clear_selection(&self) {
        self.set_selected_todo.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Id for the detail view: the current selection, or the last one while
/// the view is being torn down.
pub fn retained_selection(current: Option<u32>, previous: Option<u32>) -> Option<u32> {
    current.or(previous)
}
