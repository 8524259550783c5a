use crate::domain::values::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Developments {
    #[serde(deserialize_with = "lenient::or_default")]
    pub developments: Vec<Development>,
    /// Number of applications the source reported.
    #[serde(deserialize_with = "lenient::uint")]
    pub total: u64,
    /// Number actually listed in `developments` (capped).
    #[serde(deserialize_with = "lenient::uint")]
    pub showing: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Development {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub development_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(deserialize_with = "lenient::int")]
    pub units: i64,
    #[serde(deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(deserialize_with = "lenient::text")]
    pub applicant: String,
    #[serde(deserialize_with = "lenient::text")]
    pub submitted_date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
