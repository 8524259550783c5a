//! Backends implementing [`SuburbSource`](crate::domain::ports::suburb_source::SuburbSource).

pub mod fallback;
pub mod local;
pub mod remote;
