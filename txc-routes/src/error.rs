//! Top-level pipeline error.

use crate::routing::RoutingError;
use crate::store::StoreError;
use crate::transxchange::BatchError;

/// Errors that stop a pipeline stage as a whole.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] BatchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The routing client could not be constructed
    #[error("routing client setup failed: {0}")]
    Routing(#[from] RoutingError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn wraps_stage_errors() {
        let err: PipelineError = StoreError::Io {
            path: PathBuf::from("public/json/fife/available_lines.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "I/O error on public/json/fife/available_lines.json: no such file"
        );

        let err: PipelineError = BatchError::Source(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such directory",
        ))
        .into();
        assert_eq!(
            err.to_string(),
            "failed to list schedule documents: no such directory"
        );
    }
}
