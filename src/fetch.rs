//! Fetch-and-populate Operations
//!
//! Each operation issues one GET and writes the outcome into view state
//! through an updater. Errors never escape: they become view-local error
//! state. The loading flag is released on every path, including when the
//! future is dropped mid-flight.

use scopeguard::guard;

use crate::api::TodoApi;
use crate::lifecycle::Gated;
use crate::models::Todo;

/// Message shown by the detail view for any failure
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to fetch todo details";

/// State setters of the list view
pub trait ListUpdater {
    /// Replace the collection; the view shows it unfiltered
    fn set_todos(&self, todos: Vec<Todo>);
    fn set_loading(&self, loading: bool);
    fn set_error(&self, error: Option<String>);
}

/// State setters of the detail view
pub trait DetailUpdater {
    fn set_todo(&self, todo: Todo);
    fn set_loading(&self, loading: bool);
    fn set_error(&self, error: Option<String>);
}

impl<U: ListUpdater> ListUpdater for Gated<U> {
    fn set_todos(&self, todos: Vec<Todo>) {
        if self.is_open() {
            self.inner().set_todos(todos);
        } else {
            log::debug!("[TodoList] Dropping {} todos for a closed view", todos.len());
        }
    }

    fn set_loading(&self, loading: bool) {
        if self.is_open() {
            self.inner().set_loading(loading);
        }
    }

    fn set_error(&self, error: Option<String>) {
        if self.is_open() {
            ListUpdater::set_error(self.inner(), error);
        }
    }
}

impl<U: DetailUpdater> DetailUpdater for Gated<U> {
    fn set_todo(&self, todo: Todo) {
        if self.is_open() {
            self.inner().set_todo(todo);
        } else {
            log::debug!("[TodoDetail] Dropping stale response for todo {}", todo.id);
        }
    }

    fn set_loading(&self, loading: bool) {
        if self.is_open() {
            self.inner().set_loading(loading);
        }
    }

    fn set_error(&self, error: Option<String>) {
        if self.is_open() {
            DetailUpdater::set_error(self.inner(), error);
        }
    }
}

/// Load the whole collection into the list view.
pub async fn fetch_todos<U: ListUpdater>(api: &TodoApi, updater: &U) {
    updater.set_loading(true);
    let _release = guard((), |()| updater.set_loading(false));

    match api.list_todos().await {
        Ok(todos) => {
            log::info!("[TodoList] Loaded {} todos", todos.len());
            updater.set_todos(todos);
            updater.set_error(None);
        }
        Err(e) => {
            log::error!("[TodoList] Error loading {}: {}", api.collection_url(), e);
            updater.set_error(Some(e.to_string()));
        }
    }
}

/// Load one todo into the detail view.
///
/// On failure the previously loaded record, if any, stays in place.
pub async fn fetch_todo_detail<U: DetailUpdater>(api: &TodoApi, id: u32, updater: &U) {
    updater.set_loading(true);
    let _release = guard((), |()| updater.set_loading(false));

    match api.get_todo(id).await {
        Ok(todo) => {
            log::info!("[TodoDetail] Loaded todo {}", todo.id);
            updater.set_todo(todo);
            updater.set_error(None);
        }
        Err(e) => {
            log::error!("[TodoDetail] Error loading {}: {}", api.todo_url(id), e);
            updater.set_error(Some(DETAIL_ERROR_MESSAGE.to_string()));
        }
    }
}
