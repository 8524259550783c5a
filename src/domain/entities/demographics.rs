use crate::domain::values::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Demographics {
    #[serde(deserialize_with = "lenient::or_default")]
    pub age_distribution: Vec<AgeBracket>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub ethnicity: Vec<EthnicityShare>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeBracket {
    #[serde(deserialize_with = "lenient::text")]
    pub age: String,
    #[serde(deserialize_with = "lenient::uint")]
    pub population: u64,
    #[serde(deserialize_with = "lenient::float")]
    pub percentage: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EthnicityShare {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::float")]
    pub percentage: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
