//! Per-line record produced by the schedule extractor.

use serde::{Deserialize, Serialize};

use super::{Coordinate, ServiceCode};

/// Geometry and labels for one bus line, as read from its schedule.
///
/// `stops` is in traversal order and holds one coordinate per route link
/// plus the final stop of the last link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub service_code: ServiceCode,
    pub line_name: String,
    pub origin: String,
    pub destination: String,
    pub stops: Vec<Coordinate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_store_layout() {
        let descriptor = ServiceDescriptor {
            service_code: ServiceCode::new("F040".into()).unwrap(),
            line_name: "40".into(),
            origin: "Leven".into(),
            destination: "St Andrews".into(),
            stops: vec![Coordinate::new(51.0, -2.0), Coordinate::new(51.2, -2.2)],
        };

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "service_code": "F040",
                "line_name": "40",
                "origin": "Leven",
                "destination": "St Andrews",
                "stops": [[51.0, -2.0], [51.2, -2.2]],
            })
        );
    }
}
