//! OpenAI LLM provider for AgentForge.
//!
//! The chat-completions client is synchronous; each call runs on a blocking
//! worker so it never stalls the request-serving runtime.

mod api;
mod client;
mod normalize;
mod provider;

pub use api::{ChatCompletion, ChatCompletionRequest, ChatMessage};
pub use client::ChatClient;
pub use provider::{OpenAIProvider, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, PROVIDER_ID};
