use crate::domain::values::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Merged headline record for a suburb built from the info, summary and
/// market payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuburbDetail {
    pub id: String,
    pub name: String,
    pub state: String,
    pub postcode: String,
    pub median_house_price: i64,
    pub median_rent: i64,
    pub population: u64,
    pub median_age: u64,
    pub schools_count: u64,
    pub amenities_count: u64,
    pub development_apps: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuburbSearchResult {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub state: String,
    #[serde(deserialize_with = "lenient::text")]
    pub postcode: String,
    #[serde(deserialize_with = "lenient::uint")]
    pub population: u64,
    #[serde(deserialize_with = "lenient::uint")]
    pub median_age: u64,
    #[serde(deserialize_with = "lenient::int")]
    pub median_house_price: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub median_rent: i64,
    #[serde(deserialize_with = "lenient::uint")]
    pub amenities_count: u64,
    #[serde(deserialize_with = "lenient::uint")]
    pub schools_count: u64,
    #[serde(deserialize_with = "lenient::uint")]
    pub development_apps: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
