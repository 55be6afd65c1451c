//! OpenRouter provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use agentforge_protocols::error::ProviderError;
use agentforge_protocols::provider::{
    require_api_key, GenerateOptions, LLMProvider, NormalizedResult,
};

use crate::api::{ApiMessage, ApiRequest};
use crate::parser::{error_detail, parse_response};

pub const PROVIDER_ID: &str = "openrouter";
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const BASE_URL_ENV: &str = "OPENROUTER_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const REQUEST_TIMEOUT_SECS: u64 = 60;
const TEMPERATURE: f32 = 0.2;

/// OpenRouter LLM provider.
///
/// Holds one HTTP client for its whole lifetime.
pub struct OpenRouterProvider {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenRouterProvider {
    /// Create a provider.
    ///
    /// `api_key` falls back to `OPENROUTER_API_KEY`; `base_url` falls back to
    /// `OPENROUTER_BASE_URL`, then the public endpoint.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Result<Self, ProviderError> {
        let api_key = require_api_key(api_key, API_KEY_ENV)?;
        let base_url = base_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|u| !u.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProviderError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
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
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request(&self, prompt: &str, options: &GenerateOptions) -> ApiRequest {
        ApiRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage::user(prompt)],
            max_tokens: options.max_tokens,
            temperature: TEMPERATURE,
            functions: options.functions().map(<[_]>::to_vec),
        }
    }
}

impl std::fmt::Debug for OpenRouterProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl LLMProvider for OpenRouterProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn generate(
        &self,
        prompt: &str,
        options: GenerateOptions,
    ) -> Result<NormalizedResult, ProviderError> {
        let api_request = self.build_request(prompt, &options);
        debug!(model = %self.model, max_tokens = api_request.max_tokens, "Posting to OpenRouter");

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status,
                message: error_detail(&body),
            });
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        Ok(parse_response(raw))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
