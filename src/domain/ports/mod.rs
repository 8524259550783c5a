pub mod suburb_source;
