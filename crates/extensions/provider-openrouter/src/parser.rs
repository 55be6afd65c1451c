//! Response parsing for OpenRouter.

use serde_json::Value;

use agentforge_protocols::provider::{
    is_truthy, usage_from_value, FunctionCall, NormalizedResult,
};

/// Normalize a successful chat-completions body.
///
/// An empty or missing `choices` list yields empty text and no function call.
pub fn parse_response(raw: Value) -> NormalizedResult {
    let usage = usage_from_value(raw.get("usage"));

    let first_choice = raw
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first());

    let (text, function_call) = match first_choice {
        Some(choice) => (choice_text(choice), choice_function_call(choice)),
        None => (String::new(), None),
    };

    NormalizedResult {
        text,
        usage,
        function_call,
        raw,
    }
}

/// `message.content`, else the legacy choice-level `text`.
fn choice_text(choice: &Value) -> String {
    let content = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());
    let legacy = || choice.get("text").and_then(Value::as_str);

    content.or_else(legacy).unwrap_or_default().to_string()
}

/// `message.function_call`, else the legacy choice-level `function_call`.
fn choice_function_call(choice: &Value) -> Option<FunctionCall> {
    let from_message = choice
        .get("message")
        .and_then(|m| m.get("function_call"))
        .filter(|v| is_truthy(v))
        .and_then(FunctionCall::from_value);

    from_message.or_else(|| {
        choice
            .get("function_call")
            .filter(|v| is_truthy(v))
            .and_then(FunctionCall::from_value)
    })
}

/// Render an error body as detail text: compact JSON when it parses,
/// otherwise the raw text.
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
