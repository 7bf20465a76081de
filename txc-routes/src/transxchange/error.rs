//! Schedule extraction error types.

use std::fmt;
use std::path::PathBuf;

use crate::store::StoreError;

/// Why a single schedule document could not be turned into a line record.
///
/// These are scoped to one document: the batch logs them and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The document is not well-formed XML
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document is not valid UTF-8
    #[error("document is not valid UTF-8")]
    NotUtf8,

    /// A required element is absent
    #[error("missing required element {path}")]
    SchemaViolation { path: String },

    /// A latitude or longitude is not a decimal number
    #[error("invalid coordinate at {path}: {value:?}")]
    InvalidCoordinate { path: String, value: String },
}

/// An [`ExtractError`] tied to the document it came from.
#[derive(Debug)]
pub struct DocumentFailure {
    pub document: PathBuf,
    pub error: ExtractError,
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.document.display(), self.error)
    }
}

/// Failures that abort a whole extraction batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The document source could not be listed
    #[error("failed to list schedule documents: {0}")]
    Source(#[source] std::io::Error),

    /// A listed document could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing to the line store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
