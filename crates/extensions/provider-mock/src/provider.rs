//! Mock provider implementation.

use async_trait::async_trait;
use serde_json::json;

use agentforge_protocols::error::ProviderError;
use agentforge_protocols::provider::{GenerateOptions, LLMProvider, NormalizedResult, Usage};

pub const PROVIDER_ID: &str = "mock";

/// Provider that answers every prompt with a fixed, length-tagged text.
#[derive(Debug, Clone, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }

    fn usage() -> Usage {
        Usage::from([
            ("prompt_tokens".to_string(), 1),
            ("completion_tokens".to_string(), 1),
            ("total_tokens".to_string(), 2),
        ])
    }
}

#[async_trait]
impl LLMProvider for MockProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn generate(
        &self,
        prompt: &str,
        _options: GenerateOptions,
    ) -> Result<NormalizedResult, ProviderError> {
        let text = format!("MOCK RESPONSE — prompt length {}", prompt.chars().count());
        Ok(NormalizedResult::new(text, json!({"mock": true})).with_usage(Self::usage()))
    }
}
