use crate::domain::values::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One observation of the suburb's median house price and the two regional
/// benchmarks on the same date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricePoint {
    /// ISO-8601 date; lexicographic order is chronological order.
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(alias = "suburb", deserialize_with = "lenient::float")]
    pub suburb_value: f64,
    #[serde(rename = "regionValueCR", alias = "cr", deserialize_with = "lenient::float")]
    pub region_value_cr: f64,
    #[serde(rename = "regionValueSA3", alias = "sa3", deserialize_with = "lenient::float")]
    pub region_value_sa3: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceGrowth {
    #[serde(rename = "1year", deserialize_with = "lenient::float")]
    pub one_year: f64,
    #[serde(rename = "5year", deserialize_with = "lenient::float")]
    pub five_year: f64,
    #[serde(deserialize_with = "lenient::float")]
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionalStatus {
    Above,
    #[default]
    Below,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionComparison {
    #[serde(deserialize_with = "lenient::int")]
    pub price: i64,
    /// Percent difference of the suburb over the region, one decimal.
    #[serde(deserialize_with = "lenient::float")]
    pub difference: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub status: RegionalStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionalComparison {
    #[serde(deserialize_with = "lenient::or_default")]
    pub cr: RegionComparison,
    #[serde(deserialize_with = "lenient::or_default")]
    pub sa3: RegionComparison,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityBucket {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    #[default]
    Stable,
    Declining,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketAnalytics {
    #[serde(deserialize_with = "lenient::or_default")]
    pub volatility: VolatilityBucket,
    #[serde(deserialize_with = "lenient::or_default")]
    pub trend: Trend,
    #[serde(deserialize_with = "lenient::or_default")]
    pub insights: Vec<String>,
}

/// Canonical market-trends record. For raw payloads every figure here is
/// derived from `priceHistory`; canonical payloads are taken as stored, and
/// keys without a field here (`rentalYield`, `daysOnMarket`, ...) land in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketTrends {
    #[serde(deserialize_with = "lenient::or_default")]
    pub price_history: Vec<PricePoint>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub rent_history: Vec<PricePoint>,
    #[serde(deserialize_with = "lenient::int")]
    pub current_price: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub price_growth: PriceGrowth,
    #[serde(deserialize_with = "lenient::or_default")]
    pub regional_comparison: RegionalComparison,
    #[serde(deserialize_with = "lenient::float")]
    pub investment_score: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub analytics: MarketAnalytics,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
