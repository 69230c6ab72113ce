//! Tolerant accessors over decoded JSON objects.
//!
//! Webhook fields arrive as strings most of the time, but numbers and
//! booleans show up too (numeric process numbers, page counts sent as
//! strings). These helpers coerce what is sensible and return `None` for
//! the rest instead of failing.

use serde_json::{Map, Value};

/// Scalar field as text. `null`, arrays and objects yield `None`.
pub(crate) fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    value_text(obj.get(key)?)
}

pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Non-negative integer field. Accepts JSON numbers and numeric strings.
pub(crate) fn count(obj: &Map<String, Value>, key: &str) -> Option<u64> {
    match obj.get(key)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Integer field where zero or absence means "use the default", matching the
/// `value || default` convention of the webhook producers.
pub(crate) fn count_or(obj: &Map<String, Value>, key: &str, default: u64) -> u64 {
    match count(obj, key) {
        Some(0) | None => default,
        Some(n) => n,
    }
}
