//! Todo Endpoints
//!
//! Collection (`/todos`) and single-resource (`/todos/{id}`) reads.

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{HttpClient, HttpError};
use crate::models::Todo;

/// Todo endpoints bound to a base URL and an HTTP client
#[derive(Clone)]
pub struct TodoApi {
    base_url: Rc<str>,
    client: Rc<dyn HttpClient>,
}

impl TodoApi {
    pub fn new(base_url: &str, client: Rc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, HttpError> {
        let body = self.client.get(&self.collection_url()).await?;
        decode(body)
    }

    pub async fn get_todo(&self, id: u32) -> Result<Todo, HttpError> {
        let body = self.client.get(&self.todo_url(id)).await?;
        decode(body)
    }
}

impl fmt::Debug for TodoApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoApi").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, HttpError> {
    serde_json::from_value(body).map_err(|e| HttpError::Decode(e.to_string()))
}
