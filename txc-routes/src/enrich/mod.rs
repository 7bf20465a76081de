//! Route enrichment: line records in, routed records out.
//!
//! Reads the registry written by the extractor, sends each line's stops to a
//! [`RoutingEngine`](crate::routing::RoutingEngine) and writes the combined
//! record under the region's route directory. A line whose request fails is
//! reported and left without a record.

mod enricher;

pub use enricher::{EnrichReport, LineFailure, LineOutcome, RouteEnricher};
