//! Domain types shared by the extractor and the enricher.
//!
//! The line record (`ServiceDescriptor`) and the routed record
//! (`RouteResult`) are the two documents the pipeline persists; the
//! registry indexes the former.

mod coordinate;
mod descriptor;
mod registry;
mod route;
mod service_code;

pub use coordinate::{Coordinate, format_waypoints};
pub use descriptor::ServiceDescriptor;
pub use registry::LineRegistry;
pub use route::{RouteData, RoutePoint, RouteResult, RouteSummary};
pub use service_code::{InvalidServiceCode, ServiceCode};
