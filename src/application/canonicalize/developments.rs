use super::{from_canonical, is_canonical_list};
use crate::domain::entities::developments::{Development, Developments};
use crate::domain::values::payload::{f64_field, first_str, str_field};
use serde_json::Value;

const MAX_LISTED: usize = 50;

pub fn developments(payload: &Value) -> Developments {
    if is_canonical_list(payload, "developments", "id") {
        return from_canonical("developments", payload);
    }

    let Some(results) = payload.get("results").and_then(Value::as_array) else {
        return from_canonical("developments", payload);
    };

    let developments: Vec<Development> = results
        .iter()
        .take(MAX_LISTED)
        .enumerate()
        .filter(|(_, raw)| raw.is_object())
        .map(|(idx, raw)| development(idx, raw))
        .collect();

    Developments {
        total: results.len() as u64,
        showing: developments.len() as u64,
        developments,
        ..Developments::default()
    }
}

fn development(idx: usize, raw: &Value) -> Development {
    Development {
        id: str_field(raw, "id").unwrap_or_else(|| format!("dev-{idx}")),
        name: first_str(raw, &["description", "name"], "Development Application"),
        development_type: first_str(raw, &["category", "development_type"], "Residential"),
        status: first_str(raw, &["status"], "Unknown"),
        units: f64_field(raw, "units") as i64,
        address: first_str(raw, &["area_name", "address"], ""),
        applicant: first_str(raw, &["applicant"], "Unknown"),
        submitted_date: first_str(raw, &["date", "lodgement_date", "submitted_date"], ""),
        ..Development::default()
    }
}
