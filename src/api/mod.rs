//! Remote API Bindings
//!
//! HTTP capability and todo endpoint wrappers, organized by concern.

mod http;
mod todos;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use http::ReqwestClient;
pub use todos::TodoApi;

/// Failure of a single GET, terminal for that attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// Non-2xx response status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// Body is not JSON or not the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Injected GET capability.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait HttpClient {
    /// GET `url` and return its JSON body
    async fn get(&self, url: &str) -> Result<Value, HttpError>;
}
