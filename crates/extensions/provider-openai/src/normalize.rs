//! Response normalization.
//!
//! Nothing in here fails: missing or wrongly shaped fields become empty
//! defaults so a response that carried data never turns into an error.

use serde_json::{Map, Value};

use agentforge_protocols::provider::{usage_from_value, FunctionCall, NormalizedResult};

use crate::api::ChatCompletion;

/// Convert the completion to a plain mapping.
///
/// Tries the object form first, then coerces an array of `[key, value]`
/// pairs, and finally settles for an empty mapping.
pub(crate) fn to_mapping(completion: &ChatCompletion) -> Map<String, Value> {
    completion
        .to_dict()
        .or_else(|| coerce_pairs(completion.as_value()))
        .unwrap_or_default()
}

fn coerce_pairs(value: &Value) -> Option<Map<String, Value>> {
    value
        .as_array()?
        .iter()
        .map(|item| match item.as_array().map(Vec::as_slice) {
            Some([Value::String(key), val]) => Some((key.clone(), val.clone())),
            _ => None,
        })
        .collect()
}

pub(crate) fn normalize(completion: ChatCompletion) -> NormalizedResult {
    let mapping = to_mapping(&completion);

    let message = mapping
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(Value::as_object);

    let text = message
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let function_call = message
        .and_then(|m| m.get("function_call"))
        .and_then(FunctionCall::from_value);
    let usage = usage_from_value(mapping.get("usage"));

    NormalizedResult {
        text,
        usage,
        function_call,
        raw: completion.into_value(),
    }
}
