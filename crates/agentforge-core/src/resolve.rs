//! Startup resolution of the active provider.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use agentforge_protocols::error::ProviderError;
use agentforge_protocols::provider::LLMProvider;

use crate::registry::{registry_name, ProviderRegistry};

/// Provider used when the configured one is not registered.
pub const FALLBACK_PROVIDER: &str = "mock";

/// Fatal startup errors: the process must not serve traffic without a
/// usable provider.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No provider found for '{requested}', and no mock provider available")]
    NoProvider { requested: String },

    #[error("Failed to construct provider '{name}': {source}")]
    Construction {
        name: String,
        #[source]
        source: ProviderError,
    },
}

/// The single provider instance held for the lifetime of the process.
#[derive(Clone)]
pub struct ResolvedProvider {
    /// Normalized configured name.
    pub requested: String,
    /// Name the instance was actually built from.
    pub resolved: String,
    pub provider: Arc<dyn LLMProvider>,
}

impl ResolvedProvider {
    /// Whether resolution fell back to the mock provider.
    pub fn fell_back(&self) -> bool {
        self.requested != self.resolved
    }
}

impl fmt::Debug for ResolvedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedProvider")
            .field("requested", &self.requested)
            .field("resolved", &self.resolved)
            .field("provider", &self.provider.id())
            .finish()
    }
}

/// Resolve and instantiate the configured provider.
///
/// Unknown names fall back to [`FALLBACK_PROVIDER`]. A provider that is
/// registered but fails to construct is an error, never a fallback.
pub fn resolve_provider(
    registry: &ProviderRegistry,
    configured: &str,
) -> Result<ResolvedProvider, ResolveError> {
    let requested = match registry_name(configured) {
        name if name.is_empty() => FALLBACK_PROVIDER.to_string(),
        name => name,
    };

    let (resolved, factory) = match registry.lookup(&requested) {
        Some(factory) => (requested.clone(), factory),
        None => {
            warn!(
                "Provider '{}' is not registered (available: {:?}), falling back to '{}'",
                requested,
                registry.list_ids(),
                FALLBACK_PROVIDER
            );
            let factory = registry
                .lookup(FALLBACK_PROVIDER)
                .ok_or_else(|| ResolveError::NoProvider {
                    requested: requested.clone(),
                })?;
            (FALLBACK_PROVIDER.to_string(), factory)
        }
    };

    let provider = factory().map_err(|source| ResolveError::Construction {
        name: resolved.clone(),
        source,
    })?;

    info!("Active provider: {} (configured: {})", resolved, requested);
    Ok(ResolvedProvider {
        requested,
        resolved,
        provider,
    })
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
