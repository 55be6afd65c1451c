//! Registries for provider implementations.

mod provider;

pub use provider::{ProviderFactory, ProviderRegistry};
pub(crate) use provider::normalize_name as registry_name;
