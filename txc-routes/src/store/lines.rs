//! Line store: one record per extracted line plus the batch registry.

use std::path::{Path, PathBuf};

use crate::domain::{LineRegistry, ServiceCode, ServiceDescriptor};

use super::error::StoreError;
use super::json::{ensure_dir, read_json, write_json};

/// File name of the registry inside a line store directory.
pub const REGISTRY_FILE: &str = "available_lines.json";

/// Directory holding `<service_code>.json` line records and the registry.
#[derive(Debug, Clone)]
pub struct LineStore {
    dir: PathBuf,
}

impl LineStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the store directory if it doesn't exist.
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        ensure_dir(&self.dir)
    }

    pub fn descriptor_path(&self, code: &ServiceCode) -> PathBuf {
        self.dir.join(code.file_name())
    }

    pub fn registry_path(&self) -> PathBuf {
        self.dir.join(REGISTRY_FILE)
    }

    pub fn save_descriptor(&self, descriptor: &ServiceDescriptor) -> Result<(), StoreError> {
        write_json(&self.descriptor_path(&descriptor.service_code), descriptor)
    }

    pub fn load_descriptor(&self, code: &ServiceCode) -> Result<ServiceDescriptor, StoreError> {
        read_json(&self.descriptor_path(code))
    }

    pub fn save_registry(&self, registry: &LineRegistry) -> Result<(), StoreError> {
        write_json(&self.registry_path(), registry)
    }

    pub fn load_registry(&self) -> Result<LineRegistry, StoreError> {
        read_json(&self.registry_path())
    }
}
