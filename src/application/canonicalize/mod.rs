//! Raw-to-canonical payload transforms.
//!
//! The remote API and the local snapshots disagree on shape: the API returns
//! raw `results` lists, snapshots usually hold the canonical camelCase
//! records. Every transform here first checks which of the two it was given.
//! Canonical input is read straight into the canonical struct, so applying a
//! transform to its own serialized output is a no-op. A missing or mistyped
//! field turns into its own default, never an error. Keys the struct does
//! not model are carried through in its `extra` map.

pub mod amenities;
pub mod demographics;
pub mod developments;
pub mod schools;
pub mod search;
pub mod streets;
pub mod suburb_detail;

pub use amenities::amenities;
pub use demographics::demographics;
pub use developments::developments;
pub use schools::schools;
pub use search::search_result;
pub use streets::street_rankings;
pub use suburb_detail::suburb_detail;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Reads an already-canonical payload. Only a payload that is not an object
/// at all falls back to the empty record.
pub(crate) fn from_canonical<T: DeserializeOwned + Default>(domain: &str, payload: &Value) -> T {
    T::deserialize(payload).unwrap_or_else(|e| {
        warn!(domain, error = %e, "payload does not match canonical schema");
        T::default()
    })
}

/// `true` when `payload[key]` is a list that is empty or whose first element
/// carries `marker`.
pub(crate) fn is_canonical_list(payload: &Value, key: &str, marker: &str) -> bool {
    match payload.get(key).and_then(Value::as_array) {
        Some(items) => items.first().map_or(true, |first| first.get(marker).is_some()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_list_detection() {
        assert!(is_canonical_list(&json!({"schools": []}), "schools", "name"));
        assert!(is_canonical_list(&json!({"schools": [{"name": "A"}]}), "schools", "name"));
        assert!(!is_canonical_list(&json!({"schools": [{"title": "A"}]}), "schools", "name"));
        assert!(!is_canonical_list(&json!({"results": []}), "schools", "name"));
    }
}
