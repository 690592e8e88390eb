//! Helpers for reading fields out of a [`KeyValue`] representation.
//!
//! Producers may spell the same logical field differently (`numero` or
//! `id`), so alias lookups take the first key holding a truthy value.
//! Single-key lookups only skip missing and null values.

use crate::KeyValue;
use serde_json::Value;

/// Returns `true` unless the value is null, `false`, zero, or empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Returns the value of the first key in `keys` holding a truthy value.
#[must_use]
pub fn first_truthy<'a>(data: &'a KeyValue, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| data.get(*key))
        .find(|value| is_truthy(value))
}

/// Returns the value under `key` unless it is missing or null.
#[must_use]
pub fn present<'a>(data: &'a KeyValue, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|value| !value.is_null())
}

/// Reads a value as text. Numbers and booleans are rendered as strings.
#[must_use]
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Reads a value as an integer. Integral floats and numeric strings are accepted.
#[must_use]
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads a value as a float. Numeric strings are accepted.
#[must_use]
pub fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Converts an optional string into a JSON value (null for `None`).
#[must_use]
pub fn text_or_null(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |s| Value::String(s.to_string()))
}
