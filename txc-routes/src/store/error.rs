//! JSON store error types.

use std::path::PathBuf;

/// Errors reading or writing the line and route stores.
///
/// These are treated as fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A stored document could not be parsed, or a record could not be encoded
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
