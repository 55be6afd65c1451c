//! # AgentForge Core
//!
//! Provider registry, startup resolution and the runner that dispatches
//! prompts to the single active provider.

pub mod registry;
pub mod resolve;
pub mod runner;

pub use registry::{ProviderFactory, ProviderRegistry};
pub use resolve::{resolve_provider, ResolveError, ResolvedProvider, FALLBACK_PROVIDER};
pub use runner::Runner;
