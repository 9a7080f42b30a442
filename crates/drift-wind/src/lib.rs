//! Wind-data resolution for drift prediction.
//!
//! The resolver chains an in-memory TTL cache, two Open-Meteo query schemes
//! tried in order, and a fixed default sample, so callers always get a
//! usable wind value with a provenance label.

pub mod cache;
pub mod resolver;
pub mod sources;

pub use cache::{CellKey, WindCache};
pub use resolver::{ResolverConfig, WindResolver};
pub use sources::{FetchError, SourceScheme};
