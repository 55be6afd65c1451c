//! LLM Provider trait definition.

use async_trait::async_trait;

use super::{GenerateOptions, NormalizedResult};
use crate::error::ProviderError;

/// Core trait for LLM backend adapters.
///
/// One instance is shared by every in-flight request for the lifetime of the
/// process, so implementations must not keep per-request mutable state.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Generate a completion for a single user prompt.
    async fn generate(
        &self,
        prompt: &str,
        options: GenerateOptions,
    ) -> Result<NormalizedResult, ProviderError>;
}
