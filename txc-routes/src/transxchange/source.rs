//! Where schedule documents come from.

use std::io;
use std::path::PathBuf;

/// Lists the schedule documents for one extraction batch.
pub trait DocumentSource {
    fn documents(&self) -> io::Result<Vec<PathBuf>>;
}

/// Every regular file in a directory, sorted by path.
///
/// File names are not interpreted; sorting only makes batch logs and
/// duplicate-code resolution reproducible.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&self) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// An explicit list of documents, processed in the given order.
#[derive(Debug, Clone, Default)]
pub struct FileListSource {
    files: Vec<PathBuf>,
}

impl FileListSource {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }
}

impl DocumentSource for FileListSource {
    fn documents(&self) -> io::Result<Vec<PathBuf>> {
        Ok(self.files.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn directory_lists_files_sorted() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.xml"), "").unwrap();
        std::fs::write(dir.path().join("a.xml"), "").unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();

        let docs = DirectorySource::new(dir.path()).documents().unwrap();
        let names: Vec<_> = docs
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.xml", "b.xml"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let source = DirectorySource::new("/nonexistent/schedules");
        assert!(source.documents().is_err());
    }

    #[test]
    fn file_list_keeps_order() {
        let files = vec![PathBuf::from("z.xml"), PathBuf::from("a.xml")];
        let source = FileListSource::new(files.clone());
        assert_eq!(source.documents().unwrap(), files);
    }
}
