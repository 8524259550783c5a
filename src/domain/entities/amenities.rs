use crate::domain::values::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amenities {
    /// Sorted by `count`, largest first.
    #[serde(deserialize_with = "lenient::or_default")]
    pub categories: Vec<AmenityCategory>,
    #[serde(deserialize_with = "lenient::uint")]
    pub total: u64,
    /// Keys of a stored record that have no field here, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmenityCategory {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::uint")]
    pub count: u64,
    #[serde(deserialize_with = "lenient::float")]
    pub percentage: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
