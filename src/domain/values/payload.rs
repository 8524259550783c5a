//! Helpers for reading loosely-shaped JSON payloads.
//!
//! Both backends hand back `serde_json::Value`s whose fields may be missing,
//! null or of the wrong type. These accessors substitute defaults instead of
//! failing.

use serde_json::Value;

/// `true` for null, `{}`, `[]` and `""`. Any other value counts as data.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Numeric field, accepting numbers and numeric strings. Missing → 0.0.
pub fn f64_field(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(as_f64).unwrap_or(0.0)
}

pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String field. Numbers are rendered, everything else missing → `None`.
pub fn str_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First key of `keys` present as a string, else `default`.
pub fn first_str(value: &Value, keys: &[&str], default: &str) -> String {
    keys.iter()
        .find_map(|k| str_field(value, k))
        .unwrap_or_else(|| default.to_string())
}

/// Array under `key`, or an empty slice.
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Unwraps the `[[...]]` nesting some endpoints use for `results`.
pub fn flatten_results(results: &[Value]) -> &[Value] {
    match results.first() {
        Some(Value::Array(inner)) => inner.as_slice(),
        _ => results,
    }
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
