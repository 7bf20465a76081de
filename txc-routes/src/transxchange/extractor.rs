//! Batch extraction of line records from a set of schedule documents.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::{LineRegistry, ServiceCode};
use crate::store::LineStore;

use super::error::{BatchError, DocumentFailure, ExtractError};
use super::parse::{Extraction, parse_document};
use super::schema::SchemaConfig;
use super::source::DocumentSource;

/// Summary of one extraction batch.
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Service codes written, in processing order.
    pub written: Vec<ServiceCode>,
    /// Documents skipped for carrying serviced organisations.
    pub skipped: Vec<PathBuf>,
    /// Documents that failed to parse.
    pub failed: Vec<DocumentFailure>,
    /// The registry persisted at the end of the batch.
    pub registry: LineRegistry,
}

/// Reads schedule documents and writes line records plus the registry.
#[derive(Debug, Clone, Default)]
pub struct ScheduleExtractor {
    schema: SchemaConfig,
}

impl ScheduleExtractor {
    pub fn new(schema: SchemaConfig) -> Self {
        Self { schema }
    }

    /// Extract one document without touching any store.
    ///
    /// Read failures are returned as `Err`; parse failures are the inner
    /// result so batch callers can isolate them.
    pub fn extract_file(
        &self,
        path: &Path,
    ) -> Result<Result<Extraction, ExtractError>, BatchError> {
        let bytes = std::fs::read(path).map_err(|source| BatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let Ok(xml) = String::from_utf8(bytes) else {
            return Ok(Err(ExtractError::NotUtf8));
        };

        Ok(parse_document(&xml, &self.schema))
    }

    /// Process every document from `source` into `store`.
    ///
    /// A document that fails to parse is logged and recorded in the report;
    /// the batch continues. Nothing is written for it. The registry is
    /// written once, after the last document.
    pub fn run(
        &self,
        source: &impl DocumentSource,
        store: &LineStore,
    ) -> Result<ExtractReport, BatchError> {
        let documents = source.documents().map_err(BatchError::Source)?;
        store.ensure_dir()?;

        let mut report = ExtractReport::default();

        for path in documents {
            match self.extract_file(&path)? {
                Ok(Extraction::Skipped) => {
                    debug!(document = %path.display(), "skipping serviced organisation schedule");
                    report.skipped.push(path);
                }
                Ok(Extraction::Extracted(descriptor)) => {
                    let code = descriptor.service_code.clone();
                    store.save_descriptor(&descriptor)?;

                    if !report.registry.register(code.clone()) {
                        warn!(
                            document = %path.display(),
                            service_code = %code,
                            "service code already extracted in this batch; record overwritten"
                        );
                    }

                    debug!(
                        document = %path.display(),
                        service_code = %code,
                        stops = descriptor.stops.len(),
                        "extracted line"
                    );
                    report.written.push(code);
                }
                Err(error) => {
                    warn!(document = %path.display(), %error, "failed to extract schedule");
                    report.failed.push(DocumentFailure {
                        document: path,
                        error,
                    });
                }
            }
        }

        store.save_registry(&report.registry)?;

        info!(
            lines = report.registry.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            dir = %store.dir().display(),
            "extraction complete"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use crate::store::REGISTRY_FILE;
    use crate::transxchange::fixtures::DocumentBuilder;
    use crate::transxchange::source::{DirectorySource, FileListSource};
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn batch_writes_records_and_sorted_registry() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();

        write(src.path(), "1.xml", &DocumentBuilder::new("X59").build());
        write(src.path(), "2.xml", &DocumentBuilder::new("F040").build());
        write(
            src.path(),
            "3.xml",
            &DocumentBuilder::new("F099S").serviced_organisations("").build(),
        );

        let store = LineStore::new(out.path().join("fife"));
        let report = ScheduleExtractor::default()
            .run(&DirectorySource::new(src.path()), &store)
            .unwrap();

        let written: Vec<&str> = report.written.iter().map(ServiceCode::as_str).collect();
        assert_eq!(written, ["X59", "F040"]);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.failed.is_empty());

        let registry = std::fs::read_to_string(out.path().join("fife").join(REGISTRY_FILE)).unwrap();
        let registry: serde_json::Value = serde_json::from_str(&registry).unwrap();
        assert_eq!(registry, serde_json::json!({ "lines": ["F040", "X59"] }));

        assert!(!out.path().join("fife/F099S.json").exists());

        let f040 = store
            .load_descriptor(&ServiceCode::new("F040".into()).unwrap())
            .unwrap();
        assert_eq!(f040.stops.len(), 3);
        assert_eq!(f040.stops[2], Coordinate::new(51.2, -2.2));
    }

    #[test]
    fn failed_document_is_isolated() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();

        let bad = write(
            src.path(),
            "a.xml",
            &DocumentBuilder::new("BAD").without_services().build(),
        );
        write(src.path(), "b.xml", &DocumentBuilder::new("GOOD").build());
        write(src.path(), "c.xml", "not xml at all");

        let store = LineStore::new(out.path());
        let report = ScheduleExtractor::default()
            .run(&DirectorySource::new(src.path()), &store)
            .unwrap();

        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].document, bad);
        assert!(matches!(
            report.failed[0].error,
            ExtractError::SchemaViolation { .. }
        ));
        assert!(matches!(report.failed[1].error, ExtractError::Xml(_)));

        let lines: Vec<&str> = report.registry.iter().map(ServiceCode::as_str).collect();
        assert_eq!(lines, ["GOOD"]);
        assert!(!out.path().join("BAD.json").exists());
    }

    #[test]
    fn duplicate_service_codes_register_once() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();

        let first = write(src.path(), "a.xml", &DocumentBuilder::new("F040").build());
        let second = write(
            src.path(),
            "b.xml",
            &DocumentBuilder::new("F040")
                .labels("40A", "Leven", "Kirkcaldy")
                .build(),
        );

        let store = LineStore::new(out.path());
        let report = ScheduleExtractor::default()
            .run(&FileListSource::new(vec![first, second]), &store)
            .unwrap();

        assert_eq!(report.written.len(), 2);
        assert_eq!(report.registry.len(), 1);

        let stored = store.load_descriptor(&report.written[0]).unwrap();
        assert_eq!(stored.line_name, "40A");
    }

    #[test]
    fn empty_batch_writes_empty_registry() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();

        let store = LineStore::new(out.path());
        let report = ScheduleExtractor::default()
            .run(&DirectorySource::new(src.path()), &store)
            .unwrap();

        assert!(report.registry.is_empty());
        assert!(store.load_registry().unwrap().is_empty());
    }

    #[test]
    fn unreadable_document_aborts_batch() {
        let out = tempdir().unwrap();
        let source = FileListSource::new(vec![PathBuf::from("/nonexistent/doc.xml")]);

        let result = ScheduleExtractor::default().run(&source, &LineStore::new(out.path()));
        assert!(matches!(result, Err(BatchError::Read { .. })));
    }

    #[test]
    fn non_utf8_document_is_a_document_failure() {
        let src = tempdir().unwrap();
        let path = src.path().join("latin1.xml");
        std::fs::write(&path, [0x3c, 0xff, 0xfe, 0x3e]).unwrap();

        let result = ScheduleExtractor::default().extract_file(&path).unwrap();
        assert!(matches!(result, Err(ExtractError::NotUtf8)));
    }
}
