//! File-backed JSON stores connecting the two pipeline stages.
//!
//! The extractor writes the line store; the enricher reads it and writes
//! the route store. Every file is pretty-printed with a two-space indent so
//! that identical records produce identical bytes.

mod error;
mod json;
mod lines;
mod routes;

pub use error::StoreError;
pub use lines::{LineStore, REGISTRY_FILE};
pub use routes::RouteStore;
