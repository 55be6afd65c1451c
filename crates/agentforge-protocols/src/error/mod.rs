//! Error types for the AgentForge protocol layer.

mod provider;

pub use provider::*;
