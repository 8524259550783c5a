pub mod domain_query;
pub mod lenient;
pub mod payload;
pub mod suburb_id;
