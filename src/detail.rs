//! Detail View State
//!
//! Signals backing the detail view and its rendering policy.

use leptos::prelude::*;

use crate::fetch::DetailUpdater;
use crate::models::Todo;

/// Snapshot of the detail view state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub todo: Option<Todo>,
    pub loading: bool,
    pub error: Option<String>,
}

/// What the detail view shows
#[derive(Clone, Debug, PartialEq)]
pub enum DetailContent {
    Loading,
    Error(String),
    Loaded([String; 3]),
    Empty,
}

impl DetailState {
    pub fn content(&self) -> DetailContent {
        if self.loading {
            DetailContent::Loading
        } else if let Some(error) = &self.error {
            DetailContent::Error(error.clone())
        } else if let Some(todo) = &self.todo {
            DetailContent::Loaded(detail_lines(todo))
        } else {
            DetailContent::Empty
        }
    }
}

/// The three labelled lines of a loaded todo
pub fn detail_lines(todo: &Todo) -> [String; 3] {
    [
        format!("ID: {}", todo.id),
        format!("Title: {}", todo.title),
        format!("Status: {}", todo.status_label()),
    ]
}

/// Reactive detail state, one signal per field
#[derive(Clone, Copy)]
pub struct DetailSignals {
    pub todo: RwSignal<Option<Todo>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl DetailSignals {
    pub fn new() -> Self {
        Self {
            todo: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Current state, tracked
    pub fn snapshot(&self) -> DetailState {
        DetailState {
            todo: self.todo.get(),
            loading: self.loading.get(),
            error: self.error.get(),
        }
    }
}

impl DetailUpdater for DetailSignals {
    fn set_todo(&self, todo: Todo) {
        self.todo.set(Some(todo));
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_error(&self, error: Option<String>) {
        self.error.set(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HttpError, TodoApi};
    use crate::fetch::{fetch_todo_detail, DETAIL_ERROR_MESSAGE};
    use crate::test_utils::{todo, FakeHttpClient, RecordingDetail, BASE_URL};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn test_loaded_todo_renders_three_lines() {
        let api = TodoApi::new(
            BASE_URL,
            Rc::new(FakeHttpClient::new().respond(
                "https://api.test/todos/1",
                Ok(json!({"id": 1, "title": "Buy milk", "completed": false})),
            )),
        );
        let detail = RecordingDetail::default();
        block_on(fetch_todo_detail(&api, 1, &detail));

        assert_eq!(
            detail.state().content(),
            DetailContent::Loaded([
                "ID: 1".to_string(),
                "Title: Buy milk".to_string(),
                "Status: Open".to_string(),
            ])
        );
    }

    #[test]
    fn test_signals_keep_record_on_failure() {
        let owner = Owner::new();
        owner.with(|| {
            let api = TodoApi::new(
                BASE_URL,
                Rc::new(
                    FakeHttpClient::new()
                        .respond("https://api.test/todos/1", Ok(json!({"id": 1, "title": "Buy milk", "completed": false})))
                        .respond("https://api.test/todos/2", Err(HttpError::Status(500))),
                ),
            );
            let signals = DetailSignals::new();

            block_on(fetch_todo_detail(&api, 1, &signals));
            let state = untrack(|| signals.snapshot());
            assert!(!state.loading);
            assert_eq!(state.error, None);
            assert_eq!(state.todo, Some(todo(1, "Buy milk", false)));
            assert_eq!(state.content(), DetailContent::Loaded(detail_lines(&todo(1, "Buy milk", false))));

            block_on(fetch_todo_detail(&api, 2, &signals));
            let state = untrack(|| signals.snapshot());
            assert!(!state.loading);
            assert_eq!(state.todo.map(|t| t.id), Some(1));
            assert_eq!(state.error.as_deref(), Some(DETAIL_ERROR_MESSAGE));
        });
    }

    #[test]
    fn test_completed_status_label() {
        let lines = detail_lines(&todo(2, "Pay bills", true));
        assert_eq!(lines[2], "Status: Completed");
    }

    #[test]
    fn test_error_hides_stale_record() {
        let api = TodoApi::new(
            BASE_URL,
            Rc::new(
                FakeHttpClient::new()
                    .respond("https://api.test/todos/1", Ok(json!({"id": 1, "title": "Buy milk", "completed": false})))
                    .respond("https://api.test/todos/2", Err(HttpError::Status(500))),
            ),
        );
        let detail = RecordingDetail::default();
        block_on(fetch_todo_detail(&api, 1, &detail));
        block_on(fetch_todo_detail(&api, 2, &detail));

        let state = detail.state();
        assert!(state.todo.is_some());
        assert_eq!(state.content(), DetailContent::Error(DETAIL_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_loading_takes_precedence() {
        let state = DetailState {
            todo: Some(todo(1, "Buy milk", false)),
            loading: true,
            error: Some("boom".into()),
        };
        assert_eq!(state.content(), DetailContent::Loading);
    }

    #[test]
    fn test_nothing_loaded_is_empty() {
        assert_eq!(DetailState::default().content(), DetailContent::Empty);
    }
}
