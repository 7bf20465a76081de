//! Road routing through an OSRM-compatible directions service.
//!
//! This module provides the [`RoutingEngine`] seam, an HTTP client for the
//! OSRM route service and a mock engine for offline runs.
//!
//! Key characteristics of OSRM:
//! - Waypoints are given in the URL path as `lng,lat` pairs joined by `;`
//! - GeoJSON geometry positions are `[lng, lat]`
//! - Errors come back either as a non-200 status or as a 200 with a
//!   non-`Ok` `code`

mod client;
mod engine;
mod error;
mod mock;
mod types;

pub use client::{OsrmClient, RouteRequestOptions, RoutingConfig};
pub use engine::RoutingEngine;
pub use error::RoutingError;
pub use mock::MockRoutingEngine;
pub use types::{CODE_OK, LineStringDto, RouteDto, RouteResponse};
