//! Wire types for the chat endpoint.
//!
//! The endpoint accepts `{"message": "..."}` and answers with a JSON object
//! carrying the agent's text in `reply` (preferred) or `response`.

use serde::Serialize;
use serde_json::Value;

/// Path appended to the configured endpoint for every exchange.
pub const CHAT_PATH: &str = "api/chat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Pull the agent's text out of a successful response body.
///
/// Follows the `reply || response || JSON.stringify(body)` chain: a field is
/// only used when it holds a "truthy" value, so `null`, `false`, `0` and `""`
/// fall through to the next candidate. String fields are shown verbatim, any
/// other value is shown as compact JSON.
pub fn extract_reply(body: &Value) -> String {
    ["reply", "response"]
        .iter()
        .filter_map(|field| body.get(field))
        .find(|value| is_truthy(value))
        .map(display_value)
        .unwrap_or_else(|| body.to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
