//! OpenRouter LLM provider for AgentForge.
//!
//! Speaks the OpenAI-style chat-completions format over plain HTTP and
//! normalizes the JSON by hand.

mod api;
mod parser;
mod provider;

pub use provider::{
    OpenRouterProvider, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, PROVIDER_ID,
};
