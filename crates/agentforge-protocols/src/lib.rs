//! # AgentForge Protocols
//!
//! Core protocol definitions for the AgentForge facade.
//! Contains the provider capability and the normalized result shape that
//! every backend adapter produces. No adapter implementations live here.
//!
//! ## Core Traits
//!
//! - [`LLMProvider`] - Trait for LLM backend adapters

pub mod error;
pub mod provider;

pub use error::ProviderError;
pub use provider::{FunctionCall, GenerateOptions, LLMProvider, NormalizedResult, Usage};
