//! Bus route geometry pipeline.
//!
//! Extracts ordered stop coordinates from TransXChange schedules, then
//! enriches each line with a road-routed path and travel time from an
//! OSRM-compatible routing engine.

pub mod config;
pub mod domain;
pub mod enrich;
pub mod error;
pub mod routing;
pub mod store;
pub mod transxchange;
