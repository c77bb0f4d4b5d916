//! Client side of the todo assistant's chat API.
//!
//! - `http` - reqwest-backed [`HttpChatBackend`] talking to `POST /api/{user_id}/chat`
//!
//! Everything that can go wrong during a turn is a [`ChatError`]; the view
//! collapses all of them into one generic reply.
mod http;

pub use http::HttpChatBackend;

use crate::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Something that can answer one chat turn.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChatBackend {
    /// Base URL named in the error reply when a turn fails.
    fn base_url(&self) -> &str;

    async fn send(&self, request: &ChatRequest) -> ChatResult<ChatResponse>;
}
