use super::{ChatBackend, ChatError, ChatResult};
use crate::config::ClientConfig;
use crate::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Clone)]
pub struct HttpChatBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpChatBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatBackend for HttpChatBackend {
    fn base_url(&self) -> &str {
        &self.config.api_url
    }

    async fn send(&self, request: &ChatRequest) -> ChatResult<ChatResponse> {
        let response = self
            .client
            .post(self.config.chat_endpoint())
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ChatError::Status { status, body });
        }
        Ok(serde_json::from_str::<ChatResponse>(&body)?)
    }
}
