//! Route store: one routed record per line, grouped by region.

use std::path::{Path, PathBuf};

use crate::domain::{RouteResult, ServiceCode};

use super::error::StoreError;
use super::json::{ensure_dir, read_json, write_json};

/// Directory holding `<service_code>.json` route records for one region.
#[derive(Debug, Clone)]
pub struct RouteStore {
    dir: PathBuf,
}

impl RouteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the region directory if it doesn't exist.
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        ensure_dir(&self.dir)
    }

    pub fn route_path(&self, code: &ServiceCode) -> PathBuf {
        self.dir.join(code.file_name())
    }

    /// Write a route record, overwriting any earlier one for the same line.
    pub fn save(&self, route: &RouteResult) -> Result<(), StoreError> {
        write_json(&self.route_path(&route.service_code), route)
    }

    pub fn load(&self, code: &ServiceCode) -> Result<RouteResult, StoreError> {
        read_json(&self.route_path(code))
    }
}
