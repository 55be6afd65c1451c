//! Deterministic mock provider for AgentForge.
//!
//! Used as the default provider and as the fallback when the configured one
//! is not registered. Performs no I/O.

mod provider;

pub use provider::{MockProvider, PROVIDER_ID};
