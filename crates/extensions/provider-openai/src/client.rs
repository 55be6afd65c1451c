//! Blocking chat-completions client.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use agentforge_protocols::error::ProviderError;

use crate::api::{ChatCompletion, ChatCompletionRequest};

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Synchronous client for the chat-completions endpoint.
///
/// Every method blocks the calling thread. Call it from
/// `tokio::task::spawn_blocking`, never from an async worker.
pub struct ChatClient {
    api_key: String,
    base_url: String,
    // Built on first use: a blocking client may not be created on an async
    // worker thread.
    http: OnceLock<Client>,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: OnceLock::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn http(&self) -> Result<&Client, ProviderError> {
        if let Some(client) = self.http.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProviderError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(self.http.get_or_init(|| client))
    }

    /// Create a chat completion.
    pub fn create(&self, request: &ChatCompletionRequest) -> Result<ChatCompletion, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http()?
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        Ok(ChatCompletion::from_value(body))
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
