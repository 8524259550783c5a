use crate::domain::values::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schools {
    #[serde(deserialize_with = "lenient::or_default")]
    pub schools: Vec<School>,
    #[serde(deserialize_with = "lenient::uint")]
    pub total: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A school entry. Optional fields are omitted from the output entirely when
/// the source did not carry them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct School {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub school_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub sector: String,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_float")]
    pub naplan_score: Option<f64>,
    /// NAPLAN score rescaled from 0–1 to a 0–5 rating.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_float")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naplan_rank: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_float")]
    pub socioeconomic_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socioeconomic_rank: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_float")]
    pub attendance_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::or_default")]
    pub students: Option<StudentCount>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentCount {
    #[serde(deserialize_with = "lenient::uint")]
    pub boys: u64,
    #[serde(deserialize_with = "lenient::uint")]
    pub girls: u64,
    #[serde(deserialize_with = "lenient::uint")]
    pub total: u64,
}
