pub mod aggregator;
pub mod canonicalize;
pub mod market_analytics;
