//! Provider registry mapping names to provider factories.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use agentforge_protocols::error::ProviderError;
use agentforge_protocols::provider::LLMProvider;

/// Builds a provider instance. Registered in place of a concrete instance so
/// that adapters are only constructed once they are selected.
pub type ProviderFactory =
    Arc<dyn Fn() -> Result<Arc<dyn LLMProvider>, ProviderError> + Send + Sync>;

/// Registry of available provider implementations, keyed by lowercase name.
///
/// Registration never fails: the last registration for a name wins. There is
/// no removal.
pub struct ProviderRegistry {
    factories: DashMap<String, ProviderFactory>,
}

impl ProviderRegistry {
    /// Create a new provider registry.
    pub fn new() -> Self {
        Self {
            factories: DashMap::new(),
        }
    }

    /// Register a factory under `name`, replacing any earlier entry.
    pub fn register(&self, name: &str, factory: ProviderFactory) {
        let key = normalize_name(name);
        if self.factories.insert(key.clone(), factory).is_some() {
            debug!("Replaced provider registration '{}'", key);
        }
    }

    /// Register a batch of `(name, factory)` pairs in order.
    pub fn register_all<I, S>(&self, entries: I)
    where
        I: IntoIterator<Item = (S, ProviderFactory)>,
        S: AsRef<str>,
    {
        for (name, factory) in entries {
            self.register(name.as_ref(), factory);
        }
    }

    /// Look up a factory by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<ProviderFactory> {
        self.factories
            .get(&normalize_name(name))
            .map(|f| f.value().clone())
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&normalize_name(name))
    }

    /// List registered names, sorted.
    pub fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.factories.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.list_ids())
            .finish()
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
