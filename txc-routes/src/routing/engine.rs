//! Abstraction over routing engines.

use std::future::Future;

use crate::domain::{Coordinate, RouteSummary};

use super::error::RoutingError;

/// Computes a drivable route through ordered waypoints.
///
/// Implemented by [`OsrmClient`](super::OsrmClient) for live requests and by
/// [`MockRoutingEngine`](super::MockRoutingEngine) for canned responses.
pub trait RoutingEngine {
    /// Route through `waypoints` in order, latitude-first coordinates.
    fn route(
        &self,
        waypoints: &[Coordinate],
    ) -> impl Future<Output = Result<RouteSummary, RoutingError>> + Send;
}
