//! Error mapping and request extractors.

pub mod error;
pub mod params;
