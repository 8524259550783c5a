use crate::domain::entities::suburb::SuburbDetail;
use crate::domain::values::payload::{array_field, f64_field, flatten_results, str_field};
use crate::domain::values::suburb_id::SuburbId;
use serde_json::Value;

/// Merges the info and market payloads into the headline record. Counts
/// that no payload carries stay at zero.
pub fn suburb_detail(id: &SuburbId, info: Option<&Value>, market: Option<&Value>) -> SuburbDetail {
    let geo = info
        .and_then(|i| i.get("information"))
        .and_then(|i| i.get("geo_divisions"));

    let mut detail = SuburbDetail {
        id: id.to_string(),
        name: id.display_name(),
        state: geo.and_then(|g| str_field(g, "state")).unwrap_or_default(),
        postcode: geo.and_then(|g| str_field(g, "poa")).unwrap_or_default(),
        ..SuburbDetail::default()
    };

    if let Some(market) = market {
        detail.median_house_price = first_metric(market, "sell_price").unwrap_or(0);
        detail.median_rent = first_metric(market, "rent_price").unwrap_or(0);
    }

    detail
}

/// Value of the first record tagged with `metric`; later records for the
/// same metric are ignored.
fn first_metric(market: &Value, metric: &str) -> Option<i64> {
    flatten_results(array_field(market, "results"))
        .iter()
        .find(|r| str_field(r, "metric").as_deref() == Some(metric))
        .map(|r| f64_field(r, "value") as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id() -> SuburbId {
        SuburbId::parse("belmont-north-2280").unwrap()
    }

    #[test]
    fn test_merges_info_and_market() {
        let info = json!({"information": {"geo_divisions": {"state": "NSW", "poa": "2280"}}});
        let market = json!({"results": [[
            {"metric": "sell_price", "value": 850000.7},
            {"metric": "rent_price", "value": 620},
            {"metric": "sell_price", "value": 1},
        ]]});
        let d = suburb_detail(&id(), Some(&info), Some(&market));
        assert_eq!(d.id, "belmont-north-2280");
        assert_eq!(d.name, "Belmont North");
        assert_eq!(d.state, "NSW");
        assert_eq!(d.postcode, "2280");
        assert_eq!(d.median_house_price, 850000);
        assert_eq!(d.median_rent, 620);
        assert_eq!(d.population, 0);
    }

    #[test]
    fn test_missing_payloads_leave_defaults() {
        let d = suburb_detail(&id(), None, None);
        assert_eq!(d.name, "Belmont North");
        assert_eq!(d.state, "");
        assert_eq!(d.median_house_price, 0);
    }
}
