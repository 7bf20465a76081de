//! Road-routed line records produced by the enricher.

use serde::{Deserialize, Serialize};

use super::{Coordinate, ServiceCode, ServiceDescriptor};

/// A drivable path between ordered waypoints, as computed by a routing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Total distance in metres.
    pub distance: f64,
    /// Total travel time in seconds.
    pub duration: f64,
    /// The road-snapped path, latitude first.
    pub path: Vec<Coordinate>,
}

/// A point on a routed path, written as a `{lat, lng}` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinate> for RoutePoint {
    fn from(c: Coordinate) -> Self {
        Self {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    pub total_distance: f64,
    pub total_time: f64,
    pub coordinates: Vec<RoutePoint>,
}

/// Line metadata combined with the routing engine's path and timing.
///
/// `line` and `service_code` carry the same value; the map front end reads
/// both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub line: ServiceCode,
    pub origin: String,
    pub destination: String,
    pub service_code: ServiceCode,
    pub route_data: RouteData,
}

impl RouteResult {
    pub fn new(descriptor: &ServiceDescriptor, summary: RouteSummary) -> Self {
        Self {
            line: descriptor.service_code.clone(),
            origin: descriptor.origin.clone(),
            destination: descriptor.destination.clone(),
            service_code: descriptor.service_code.clone(),
            route_data: RouteData {
                total_distance: summary.distance,
                total_time: summary.duration,
                coordinates: summary.path.into_iter().map(RoutePoint::from).collect(),
            },
        }
    }
}
