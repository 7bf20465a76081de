//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in decimal degrees, latitude first.
///
/// No range validation is applied: values read from a schedule are carried
/// through unchanged. In the line store a coordinate is written as a
/// `[lat, lng]` pair.
///
/// # Examples
///
/// ```
/// use txc_routes::domain::Coordinate;
///
/// let stop = Coordinate::new(56.34, -2.79);
/// assert_eq!(stop.to_waypoint(), "-2.79,56.34");
///
/// // Routing engines and GeoJSON put longitude first
/// assert_eq!(Coordinate::from_lng_lat([-2.79, 56.34]), stop);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a coordinate from a `[longitude, latitude]` pair.
    pub fn from_lng_lat([lng, lat]: [f64; 2]) -> Self {
        Self { lat, lng }
    }

    /// Format as a `lng,lat` routing waypoint.
    pub fn to_waypoint(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Join waypoints into the `lng,lat;lng,lat` form used in routing URLs.
pub fn format_waypoints(stops: &[Coordinate]) -> String {
    stops
        .iter()
        .map(Coordinate::to_waypoint)
        .collect::<Vec<_>>()
        .join(";")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Reading a `[lng, lat]` pair puts the axes back in lat/lng order
        #[test]
        fn from_lng_lat_swaps(lng in -180.0f64..180.0, lat in -90.0f64..90.0) {
            let c = Coordinate::from_lng_lat([lng, lat]);
            prop_assert_eq!(c.lat, lat);
            prop_assert_eq!(c.lng, lng);
        }

        /// The waypoint string parses back to the original values
        #[test]
        fn waypoint_parses_back(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
            let waypoint = Coordinate::new(lat, lng).to_waypoint();
            let (x, y) = waypoint.split_once(',').unwrap();
            prop_assert_eq!(x.parse::<f64>().unwrap(), lng);
            prop_assert_eq!(y.parse::<f64>().unwrap(), lat);
        }
    }
}
