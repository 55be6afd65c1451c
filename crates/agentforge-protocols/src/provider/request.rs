//! Generation options.

use serde::{Deserialize, Serialize};

/// Default completion budget when the caller does not set one.
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Options accepted by [`LLMProvider::generate`](super::LLMProvider::generate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Maximum tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Function definitions offered to the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<serde_json::Value>>,
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            functions: None,
        }
    }
}

impl GenerateOptions {
    /// Set max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the function definitions.
    pub fn with_functions(mut self, functions: Vec<serde_json::Value>) -> Self {
        self.functions = Some(functions);
        self
    }

    /// Function definitions to send, `None` when there are none.
    pub fn functions(&self) -> Option<&[serde_json::Value]> {
        self.functions.as_deref().filter(|f| !f.is_empty())
    }
}
