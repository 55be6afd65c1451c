//! OpenAI provider implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use agentforge_protocols::error::ProviderError;
use agentforge_protocols::provider::{
    require_api_key, GenerateOptions, LLMProvider, NormalizedResult,
};

use crate::api::{ChatCompletionRequest, ChatMessage};
use crate::client::ChatClient;
use crate::normalize::normalize;

pub const PROVIDER_ID: &str = "openai";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const TEMPERATURE: f32 = 0.2;

/// OpenAI LLM provider.
#[derive(Debug)]
pub struct OpenAIProvider {
    client: Arc<ChatClient>,
    model: String,
}

impl OpenAIProvider {
    /// Create a provider for the public OpenAI endpoint.
    ///
    /// Falls back to `OPENAI_API_KEY` when `api_key` is absent or empty.
    pub fn new(api_key: Option<String>) -> Result<Self, ProviderError> {
        Self::with_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create provider with custom API URL (for OpenAI-compatible APIs).
    pub fn with_url(
        api_key: Option<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let api_key = require_api_key(api_key, API_KEY_ENV)?;
        Ok(Self {
            client: Arc::new(ChatClient::new(api_key, base_url)),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    fn build_request(&self, prompt: &str, options: &GenerateOptions) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: options.max_tokens,
            functions: options.functions().map(<[_]>::to_vec),
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn generate(
        &self,
        prompt: &str,
        options: GenerateOptions,
    ) -> Result<NormalizedResult, ProviderError> {
        let request = self.build_request(prompt, &options);
        let client = Arc::clone(&self.client);

        debug!(model = %self.model, max_tokens = request.max_tokens, "Dispatching chat completion");
        let completion = tokio::task::spawn_blocking(move || client.create(&request))
            .await
            .map_err(|e| ProviderError::TaskFailed(e.to_string()))??;

        Ok(normalize(completion))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
