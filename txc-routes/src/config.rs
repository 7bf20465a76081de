//! On-disk layout of schedules, line records and route records.

use std::path::{Path, PathBuf};

use crate::store::{LineStore, RouteStore};

/// Directory conventions shared by both pipeline stages.
///
/// Relative to `root`:
/// - schedules: `test-data/<source>`
/// - line records: `public/json/<dataset>`
/// - route records: `public/route-data/<region>`
///
/// The enricher reads `public/json/<region>`, so a region and the dataset
/// it was extracted into share a name.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn schedule_dir(&self, source: &str) -> PathBuf {
        self.root.join("test-data").join(source)
    }

    pub fn line_dir(&self, dataset: &str) -> PathBuf {
        self.root.join("public").join("json").join(dataset)
    }

    pub fn route_dir(&self, region: &str) -> PathBuf {
        self.root.join("public").join("route-data").join(region)
    }

    pub fn line_store(&self, dataset: &str) -> LineStore {
        LineStore::new(self.line_dir(dataset))
    }

    pub fn route_store(&self, region: &str) -> RouteStore {
        RouteStore::new(self.route_dir(region))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(".")
    }
}
