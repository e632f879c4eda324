//! Response payload classification
//!
//! The platform answers list and single-object endpoints in one of two
//! envelopes: a JSON object whose first (usually only) key wraps the actual
//! payload, or a bare JSON array. The classifier decodes that duality into a
//! tagged union exactly once, at the transport boundary; everything downstream
//! matches on the variant instead of re-inspecting JSON types.
//!
//! Anything that is neither an object nor an array is rejected outright, so
//! an unrecognized server format surfaces immediately instead of silently
//! corrupting an accumulated result set.

use crate::error::{Error, Result};
use serde_json::Value;

/// A classified response payload
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Top-level object; `value` is whatever sat under its first key.
    ///
    /// Relies on the decoder preserving key order: the first key is the
    /// first one the server emitted.
    Wrapped {
        /// The envelope key, e.g. `"assets"`
        key: String,
        /// The wrapped payload: a list for collection endpoints, an object
        /// for single-resource endpoints
        value: Value,
    },
    /// Top-level array, passed through as-is
    List(Vec<Value>),
}

/// Classify one decoded response body.
pub fn classify(body: Value) -> Result<Payload> {
    match body {
        Value::Object(mut map) => {
            let Some(key) = map.keys().next().cloned() else {
                return Err(Error::unsupported_shape(
                    "top-level object has no key to unwrap",
                ));
            };
            let value = map.remove(&key).unwrap_or(Value::Null);
            Ok(Payload::Wrapped { key, value })
        }
        Value::Array(items) => Ok(Payload::List(items)),
        other => Err(Error::unsupported_shape(format!(
            "expected an object or array, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
