//! Remote response - a Bot API reply kept as raw JSON

use serde::Serialize;
use serde_json::{Map, Value};

/// Parsed Bot API reply
///
/// The payload is kept verbatim so it can be handed back to the caller.
/// Anything that is not a JSON object (HTML error pages, empty bodies,
/// transport failures) collapses into an empty object, which reads as not ok.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RemoteResponse(Value);

impl RemoteResponse {
    /// Parse a raw response body
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value @ Value::Object(_)) => Self(value),
            _ => Self::empty(),
        }
    }

    /// Empty object, used when there is nothing to parse
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// True only when the payload has `"ok": true` (a boolean, not a truthy value)
    pub fn is_ok(&self) -> bool {
        self.0.get("ok") == Some(&Value::Bool(true))
    }

    /// Bot API error description, if present
    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    /// Bot API error code, if present
    pub fn error_code(&self) -> Option<i64> {
        self.0.get("error_code").and_then(Value::as_i64)
    }

    /// Borrow the raw payload
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the raw payload
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for RemoteResponse {
    fn default() -> Self {
        Self::empty()
    }
}
