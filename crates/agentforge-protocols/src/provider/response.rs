//! Normalized result shape shared by every provider.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token accounting. Keys are vendor-dependent and may be empty.
pub type Usage = BTreeMap<String, u64>;

/// The response contract every adapter produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    /// Generated completion text, empty when the vendor returned none.
    #[serde(default)]
    pub text: String,

    /// Token accounting.
    #[serde(default)]
    pub usage: Usage,

    /// Structured call requested by the model.
    #[serde(default)]
    pub function_call: Option<FunctionCall>,

    /// Unmodified vendor response.
    #[serde(default)]
    pub raw: Value,
}

impl NormalizedResult {
    /// Create a text-only result.
    pub fn new(text: impl Into<String>, raw: Value) -> Self {
        Self {
            text: text.into(),
            usage: Usage::new(),
            function_call: None,
            raw,
        }
    }

    /// Set the usage map.
    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = usage;
        self
    }

    /// Set the function call.
    pub fn with_function_call(mut self, function_call: Option<FunctionCall>) -> Self {
        self.function_call = function_call;
        self
    }
}

/// A structured function call requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Lenient extraction from vendor JSON.
    ///
    /// Returns `None` unless `value` is an object with a string `name`.
    /// `arguments` may be an object or a JSON-encoded object string; any other
    /// shape becomes an empty map.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = obj.get("name")?.as_str()?;
        let arguments = match obj.get("arguments") {
            Some(Value::Object(map)) => map.clone(),
            Some(Value::String(encoded)) => match serde_json::from_str::<Value>(encoded) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            },
            _ => Map::new(),
        };
        Some(Self::new(name, arguments))
    }
}

/// Lenient extraction of a vendor `usage` object.
///
/// Keeps non-negative integer entries and skips everything else.
pub fn usage_from_value(value: Option<&Value>) -> Usage {
    value
        .and_then(Value::as_object)
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| v.as_u64().map(|n| (k.clone(), n)))
                .collect()
        })
        .unwrap_or_default()
}

/// Whether a JSON value counts as "present" for fallback chains.
///
/// `null`, `false`, empty strings, empty arrays and empty objects are absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
