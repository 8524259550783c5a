use super::from_canonical;
use crate::domain::entities::suburb::SuburbSearchResult;
use crate::domain::values::payload::str_field;
use serde_json::Value;

/// Converts one search hit. Remote hits carry `area_name`; snapshot hits are
/// already canonical.
pub fn search_result(item: &Value) -> SuburbSearchResult {
    let Some(area_name) = str_field(item, "area_name") else {
        return from_canonical("search", item);
    };

    let information = item.get("information");
    let postcode = information.and_then(|i| str_field(i, "poa")).unwrap_or_default();
    let state = information.and_then(|i| str_field(i, "state")).unwrap_or_default();

    let name = area_name
        .replace(" (", "-")
        .replace(')', "")
        .split_whitespace()
        .filter(|token| !is_upper(token) || token.chars().count() <= 3)
        .collect::<Vec<_>>()
        .join(" ");

    SuburbSearchResult {
        id: format!("{}-{}", name.to_lowercase().replace(' ', "-"), postcode),
        name,
        state,
        postcode,
        ..SuburbSearchResult::default()
    }
}

/// At least one cased character, and no lowercase ones.
fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}
