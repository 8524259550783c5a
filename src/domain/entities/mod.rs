pub mod amenities;
pub mod demographics;
pub mod developments;
pub mod market_trends;
pub mod schools;
pub mod suburb;
