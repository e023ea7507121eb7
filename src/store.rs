//! List View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store holds
//! only the full collection and the active filter; the visible subset is
//! always computed from them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::fetch::ListUpdater;
use crate::filter::filter_todos;
use crate::models::{Todo, TodoFilter};

/// List view state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ListState {
    /// Full collection from the last successful fetch
    pub todos: Vec<Todo>,
    /// Active filter
    pub filter: TodoFilter,
    /// A fetch is in flight
    pub loading: bool,
    /// Error of the last fetch, if it failed
    pub error: Option<String>,
}

/// What the list view's content region shows
#[derive(Clone, Debug, PartialEq)]
pub enum ListContent {
    Loading,
    Error(String),
    Rows(Vec<Todo>),
}

impl ListState {
    /// Visible subset under the active filter
    pub fn visible(&self) -> Vec<Todo> {
        filter_todos(&self.todos, self.filter)
    }

    /// Loading hides everything; an error hides the rows even if stale
    /// todos are still held.
    pub fn content(&self) -> ListContent {
        if self.loading {
            ListContent::Loading
        } else if let Some(error) = &self.error {
            ListContent::Error(error.clone())
        } else {
            ListContent::Rows(self.visible())
        }
    }

    pub fn summary(&self) -> String {
        format!("{} of {} todos", self.visible().len(), self.todos.len())
    }
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Switch the active filter; the visible rows follow
pub fn store_select_filter(store: &ListStore, filter: TodoFilter) {
    *store.filter().write() = filter;
}

impl ListUpdater for ListStore {
    fn set_todos(&self, todos: Vec<Todo>) {
        *self.todos().write() = todos;
        *self.filter().write() = TodoFilter::All;
    }

    fn set_loading(&self, loading: bool) {
        *self.loading().write() = loading;
    }

    fn set_error(&self, error: Option<String>) {
        *self.error().write() = error;
    }
}
