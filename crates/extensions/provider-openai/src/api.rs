//! OpenAI chat-completions wire types.

use serde::Serialize;
use serde_json::{Map, Value};

/// Chat-completions request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<Value>>,
    pub temperature: f32,
}

/// Chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Decoded chat-completions response.
///
/// Kept as untyped JSON so unexpected vendor schemas survive intact in
/// `raw`; field extraction happens during normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    body: Value,
}

impl ChatCompletion {
    pub fn from_value(body: Value) -> Self {
        Self { body }
    }

    /// The response as a mapping, `None` when the body is not a JSON object.
    pub fn to_dict(&self) -> Option<Map<String, Value>> {
        self.body.as_object().cloned()
    }

    pub fn as_value(&self) -> &Value {
        &self.body
    }

    pub fn into_value(self) -> Value {
        self.body
    }
}
