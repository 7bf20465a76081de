//! OSRM route service response DTOs.
//!
//! Only the fields the pipeline reads are modelled; legs and turn-by-turn
//! steps are ignored during deserialization.

use serde::Deserialize;

use crate::domain::{Coordinate, RouteSummary};

use super::error::RoutingError;

/// Engine status code for a successful request.
pub const CODE_OK: &str = "Ok";

/// Response from `/route/v1/{profile}/{coordinates}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    /// `Ok` on success, otherwise an error code such as `NoRoute`.
    pub code: String,

    /// Human-readable error text, present on failures.
    pub message: Option<String>,

    /// Route candidates, best first.
    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    /// Metres.
    pub distance: f64,

    /// Seconds.
    pub duration: f64,

    /// Requested with `geometries=geojson`.
    pub geometry: LineStringDto,
}

/// A GeoJSON LineString; positions are `[lng, lat]`.
#[derive(Debug, Clone, Deserialize)]
pub struct LineStringDto {
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteResponse {
    /// Take the first route candidate, checking the engine status code.
    pub fn into_summary(self) -> Result<RouteSummary, RoutingError> {
        if self.code != CODE_OK {
            return Err(RoutingError::Engine {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }

        let route = self.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;

        Ok(RouteSummary {
            distance: route.distance,
            duration: route.duration,
            path: route
                .geometry
                .coordinates
                .into_iter()
                .map(Coordinate::from_lng_lat)
                .collect(),
        })
    }
}
