//! Runner dispatching prompts to the active provider.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error};

use agentforge_protocols::error::ProviderError;
use agentforge_protocols::provider::{GenerateOptions, LLMProvider, NormalizedResult};

/// Thin orchestration layer over the single active provider.
#[derive(Clone)]
pub struct Runner {
    provider: Arc<dyn LLMProvider>,
}

impl Runner {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    /// ID of the wrapped provider.
    pub fn provider_id(&self) -> &str {
        self.provider.id()
    }

    /// Send one prompt to the provider.
    pub async fn ask(
        &self,
        prompt: &str,
        options: GenerateOptions,
    ) -> Result<NormalizedResult, ProviderError> {
        let started = Instant::now();
        let result = self.provider.generate(prompt, options).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(r) => debug!(
                provider = self.provider.id(),
                prompt_chars = prompt.chars().count(),
                text_chars = r.text.chars().count(),
                elapsed_ms,
                "Generation completed"
            ),
            Err(e) => error!(
                provider = self.provider.id(),
                elapsed_ms,
                "Generation failed: {}", e
            ),
        }
        result
    }
}
