use super::from_canonical;
use crate::domain::entities::demographics::{AgeBracket, Demographics, EthnicityShare};
use crate::domain::values::payload::{array_field, as_f64, f64_field, first_str, round_to, str_field};
use serde_json::Value;

const TOP_ETHNICITIES: usize = 10;

pub fn demographics(payload: &Value) -> Demographics {
    if payload.get("ageDistribution").is_some() {
        return from_canonical("demographics", payload);
    }

    Demographics {
        age_distribution: age_distribution(payload),
        ethnicity: ethnicity(payload),
        ..Demographics::default()
    }
}

/// Combined-gender brackets only. A repeated bracket overwrites the earlier
/// value but keeps the earlier position.
fn age_distribution(payload: &Value) -> Vec<AgeBracket> {
    let mut brackets: Vec<AgeBracket> = Vec::new();

    for raw in array_field(payload, "age_brackets") {
        if str_field(raw, "gender").as_deref() != Some("persons") {
            continue;
        }
        let bracket = AgeBracket {
            age: str_field(raw, "age").unwrap_or_default(),
            population: 0,
            percentage: round_to(f64_field(raw, "proportion") * 100.0, 1),
            ..AgeBracket::default()
        };
        match brackets.iter_mut().find(|b| b.age == bracket.age) {
            Some(existing) => *existing = bracket,
            None => brackets.push(bracket),
        }
    }

    brackets
}

fn ethnicity(payload: &Value) -> Vec<EthnicityShare> {
    if let Some(list) = payload.get("ethnicities").and_then(Value::as_array) {
        return list
            .iter()
            .take(TOP_ETHNICITIES)
            .map(|eth| {
                let share = eth
                    .get("proportion")
                    .or_else(|| eth.get("percentage"))
                    .and_then(as_f64)
                    .unwrap_or(0.0);
                EthnicityShare {
                    name: first_str(eth, &["ethnicity", "name"], ""),
                    percentage: round_to(share * 100.0, 1),
                    ..EthnicityShare::default()
                }
            })
            .collect();
    }

    averaged_over_areas(array_field(payload, "results"))
}

/// Each sub-area record carries an `ethnicity` map of name → proportion.
/// Proportions are averaged over the records that have a map.
fn averaged_over_areas(areas: &[Value]) -> Vec<EthnicityShare> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut area_count = 0usize;

    for area in areas {
        let Some(map) = area.get("ethnicity").and_then(Value::as_object) else {
            continue;
        };
        area_count += 1;
        for (name, proportion) in map {
            let proportion = as_f64(proportion).unwrap_or(0.0);
            match totals.iter_mut().find(|(n, _)| n == name) {
                Some((_, total)) => *total += proportion,
                None => totals.push((name.clone(), proportion)),
            }
        }
    }

    if area_count == 0 {
        return vec![];
    }

    let mut shares: Vec<EthnicityShare> = totals
        .into_iter()
        .map(|(name, total)| EthnicityShare {
            name,
            percentage: round_to(total / area_count as f64 * 100.0, 1),
            ..EthnicityShare::default()
        })
        .collect();
    shares.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    shares.truncate(TOP_ETHNICITIES);
    shares
}
