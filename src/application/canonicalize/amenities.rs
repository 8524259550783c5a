use super::{from_canonical, is_canonical_list};
use crate::domain::entities::amenities::{Amenities, AmenityCategory};
use crate::domain::values::payload::{round_to, str_field};
use serde_json::Value;

pub fn amenities(payload: &Value) -> Amenities {
    if is_canonical_list(payload, "categories", "name") {
        return from_canonical("amenities", payload);
    }

    let Some(results) = payload.get("results").and_then(Value::as_array) else {
        return from_canonical("amenities", payload);
    };

    let mut counts: Vec<(String, u64)> = Vec::new();
    for item in results {
        let category = str_field(item, "category").unwrap_or_else(|| "Other".to_string());
        match counts.iter_mut().find(|(name, _)| *name == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((category, 1)),
        }
    }

    let total = results.len() as u64;
    let mut categories: Vec<AmenityCategory> = counts
        .into_iter()
        .map(|(name, count)| AmenityCategory {
            name,
            count,
            percentage: if total > 0 {
                round_to(count as f64 / total as f64 * 100.0, 1)
            } else {
                0.0
            },
            ..AmenityCategory::default()
        })
        .collect();
    // Stable: ties keep first-seen order.
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    Amenities {
        categories,
        total,
        ..Amenities::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tallies_categories() {
        let raw = json!({
            "results": [
                {"category": "Cafe"},
                {"category": "Park"},
                {"category": "Park"},
                {"name": "no category"},
            ]
        });
        let a = amenities(&raw);
        assert_eq!(a.total, 4);
        assert_eq!(a.categories[0].name, "Park");
        assert_eq!(a.categories[0].count, 2);
        assert_eq!(a.categories[0].percentage, 50.0);
        // Ties keep first-seen order.
        assert_eq!(a.categories[1].name, "Cafe");
        assert_eq!(a.categories[2].name, "Other");
        assert_eq!(a.categories[2].percentage, 25.0);
    }

    #[test]
    fn test_empty_results() {
        let a = amenities(&json!({"results": []}));
        assert!(a.categories.is_empty());
        assert_eq!(a.total, 0);
    }

    #[test]
    fn test_canonical_passthrough() {
        let canonical = json!({"categories": [{"name": "Park", "count": 3, "percentage": 100.0}], "total": 3});
        let a = amenities(&canonical);
        assert_eq!(a.total, 3);
        assert_eq!(a.categories[0].count, 3);
    }

    #[test]
    fn test_float_count_in_stored_record_is_kept() {
        let canonical = json!({"categories": [{"name": "Park", "count": 3.0, "percentage": 100.0}], "total": 3});
        let a = amenities(&canonical);
        assert_eq!(a.total, 3);
        assert_eq!(a.categories[0].name, "Park");
        assert_eq!(a.categories[0].count, 3);
    }
}
