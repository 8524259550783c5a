use crate::domain::values::payload::{array_field, flatten_results};
use serde_json::Value;

/// Street entries out of a street-insights payload: `results` with any
/// `[[...]]` nesting removed, or the payload itself when it is a list.
pub fn street_rankings(payload: &Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => flatten_results(items).to_vec(),
        _ => flatten_results(array_field(payload, "results")).to_vec(),
    }
}
