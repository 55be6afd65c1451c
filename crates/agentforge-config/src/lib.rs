//! # AgentForge Config
//!
//! Configuration management for the AgentForge facade.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
