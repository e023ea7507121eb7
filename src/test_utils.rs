//! Test helpers
//!
//! Fake HTTP client and recording updaters for driving the fetch
//! operations without a browser or network.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use crate::api::{HttpClient, HttpError};
use crate::detail::DetailState;
use crate::fetch::{DetailUpdater, ListUpdater};
use crate::models::{Todo, TodoFilter};
use crate::store::ListState;

pub const BASE_URL: &str = "https://api.test";

pub type Reply = Result<Value, HttpError>;

pub fn todo(id: u32, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        completed,
    }
}

// ===== FakeHttpClient =====

enum Canned {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Canned responses per URL; unknown URLs answer 404
pub struct FakeHttpClient {
    replies: RefCell<HashMap<String, Canned>>,
    requests: RefCell<Vec<String>>,
}

impl FakeHttpClient {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Answer every GET of `url` with `reply`
    pub fn respond(self, url: &str, reply: Reply) -> Self {
        self.replies.borrow_mut().insert(url.to_string(), Canned::Ready(reply));
        self
    }

    /// Answer the next GET of `url` once the returned sender fires
    pub fn defer(&self, url: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().insert(url.to_string(), Canned::Deferred(rx));
        tx
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpClient for FakeHttpClient {
    async fn get(&self, url: &str) -> Result<Value, HttpError> {
        self.requests.borrow_mut().push(url.to_string());
        let canned = self.replies.borrow_mut().remove(url);
        match canned {
            Some(Canned::Ready(reply)) => {
                self.replies
                    .borrow_mut()
                    .insert(url.to_string(), Canned::Ready(reply.clone()));
                reply
            }
            Some(Canned::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(HttpError::Transport("reply dropped".into()))),
            None => Err(HttpError::Status(404)),
        }
    }
}

// ===== Recording updaters =====

/// List view state kept in a cell, plus every loading flag written
#[derive(Default)]
pub struct RecordingList {
    state: RefCell<ListState>,
    loading_history: RefCell<Vec<bool>>,
}

impl RecordingList {
    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    pub fn loading_history(&self) -> Vec<bool> {
        self.loading_history.borrow().clone()
    }

    pub fn select_filter(&self, filter: TodoFilter) {
        self.state.borrow_mut().filter = filter;
    }
}

impl ListUpdater for RecordingList {
    fn set_todos(&self, todos: Vec<Todo>) {
        let mut state = self.state.borrow_mut();
        state.todos = todos;
        state.filter = TodoFilter::All;
    }

    fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
        self.loading_history.borrow_mut().push(loading);
    }

    fn set_error(&self, error: Option<String>) {
        self.state.borrow_mut().error = error;
    }
}

impl ListUpdater for Rc<RecordingList> {
    fn set_todos(&self, todos: Vec<Todo>) {
        ListUpdater::set_todos(&**self, todos);
    }

    fn set_loading(&self, loading: bool) {
        ListUpdater::set_loading(&**self, loading);
    }

    fn set_error(&self, error: Option<String>) {
        ListUpdater::set_error(&**self, error);
    }
}

/// Detail view state kept in a cell, plus every loading flag written
#[derive(Default)]
pub struct RecordingDetail {
    state: RefCell<DetailState>,
    loading_history: RefCell<Vec<bool>>,
}

impl RecordingDetail {
    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    pub fn loading_history(&self) -> Vec<bool> {
        self.loading_history.borrow().clone()
    }
}

impl DetailUpdater for RecordingDetail {
    fn set_todo(&self, todo: Todo) {
        self.state.borrow_mut().todo = Some(todo);
    }

    fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
        self.loading_history.borrow_mut().push(loading);
    }

    fn set_error(&self, error: Option<String>) {
        self.state.borrow_mut().error = error;
    }
}

impl DetailUpdater for Rc<RecordingDetail> {
    fn set_todo(&self, todo: Todo) {
        DetailUpdater::set_todo(&**self, todo);
    }

    fn set_loading(&self, loading: bool) {
        DetailUpdater::set_loading(&**self, loading);
    }

    fn set_error(&self, error: Option<String>) {
        DetailUpdater::set_error(&**self, error);
    }
}
