//! Built-in provider registration for AgentForge.

use std::sync::Arc;

use tracing::info;

use agentforge_config::{Config, ProviderConfig};
use agentforge_core::{ProviderFactory, ProviderRegistry};
use agentforge_protocols::error::ProviderError;
use agentforge_protocols::provider::LLMProvider;
use agentforge_provider_mock::MockProvider;
use agentforge_provider_openai::OpenAIProvider;
use agentforge_provider_openrouter::OpenRouterProvider;

/// Built-in `(name, factory)` pairs. Per-provider settings from `config` are
/// captured now; construction happens only for the provider that resolves.
pub(crate) fn builtin_providers(config: &Config) -> Vec<(&'static str, ProviderFactory)> {
    let mock: ProviderFactory =
        Arc::new(|| -> Result<Arc<dyn LLMProvider>, ProviderError> {
            Ok(Arc::new(MockProvider::new()))
        });

    let openai_config = config.provider_config(agentforge_provider_openai::PROVIDER_ID);
    let openai: ProviderFactory =
        Arc::new(move || -> Result<Arc<dyn LLMProvider>, ProviderError> {
            Ok(Arc::new(build_openai(&openai_config)?))
        });

    let openrouter_config = config.provider_config(agentforge_provider_openrouter::PROVIDER_ID);
    let openrouter: ProviderFactory =
        Arc::new(move || -> Result<Arc<dyn LLMProvider>, ProviderError> {
            Ok(Arc::new(build_openrouter(&openrouter_config)?))
        });

    vec![
        (agentforge_provider_mock::PROVIDER_ID, mock),
        (agentforge_provider_openai::PROVIDER_ID, openai),
        (agentforge_provider_openrouter::PROVIDER_ID, openrouter),
    ]
}

/// Register the built-in providers.
pub(crate) fn register_providers(registry: &ProviderRegistry, config: &Config) {
    registry.register_all(builtin_providers(config));
    info!("Registered providers: {:?}", registry.list_ids());
}

fn build_openai(config: &ProviderConfig) -> Result<OpenAIProvider, ProviderError> {
    let provider = match &config.base_url {
        Some(base_url) => OpenAIProvider::with_url(config.api_key.clone(), base_url.clone())?,
        None => OpenAIProvider::new(config.api_key.clone())?,
    };
    Ok(match &config.model {
        Some(model) => provider.with_model(model.clone()),
        None => provider,
    })
}

fn build_openrouter(config: &ProviderConfig) -> Result<OpenRouterProvider, ProviderError> {
    let provider = OpenRouterProvider::new(config.api_key.clone(), config.base_url.clone())?;
    Ok(match &config.model {
        Some(model) => provider.with_model(model.clone()),
        None => provider,
    })
}
