//! TransXChange schedule extraction.
//!
//! Reads bus schedule documents in the TransXChange XML dialect and turns
//! each into a [`ServiceDescriptor`](crate::domain::ServiceDescriptor): the
//! line's service code, labels and ordered stop coordinates.
//!
//! Key characteristics of the input:
//! - Stop positions live in the route links' track mappings, not in the
//!   stop points section
//! - The final stop is the *last* location of the final link's mapping
//! - Schedules with a `ServicedOrganisations` section are skipped

mod error;
mod extractor;
mod parse;
mod query;
mod schema;
mod source;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{BatchError, DocumentFailure, ExtractError};
pub use extractor::{ExtractReport, ScheduleExtractor};
pub use parse::{Extraction, parse_document};
pub use query::Element;
pub use schema::{SchemaConfig, TRANSXCHANGE_NAMESPACE};
pub use source::{DirectorySource, DocumentSource, FileListSource};
