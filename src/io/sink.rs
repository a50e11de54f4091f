//! Persistence sinks
//!
//! - `FileSink` writes to the filesystem, creating parent directories as needed
//! - `MemorySink` keeps everything in memory (tests, dry runs)

use crate::core::traits::Sink;
use crate::types::PipelineError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Sink writing each destination as a file
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl Sink for FileSink {
    fn persist(&mut self, contents: &str, destination: &Path) -> Result<(), PipelineError> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| PipelineError::write(destination, e))?;
            }
        }

        fs::write(destination, contents).map_err(|e| PipelineError::write(destination, e))
    }
}

/// Sink keeping the last contents written to each destination
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    written: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, destination: &Path) -> Option<&str> {
        self.written.get(destination).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

impl Sink for MemorySink {
    fn persist(&mut self, contents: &str, destination: &Path) -> Result<(), PipelineError> {
        self.written
            .insert(destination.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_creates_parent_directories() {
        let dir = tempdir().expect("Failed to create temp dir");
        let destination = dir.path().join("output").join("nested").join("report.txt");

        FileSink.persist("hello\n", &destination).unwrap();

        assert_eq!(fs::read_to_string(&destination).unwrap(), "hello\n");
    }

    #[test]
    fn test_file_sink_overwrites() {
        let dir = tempdir().expect("Failed to create temp dir");
        let destination = dir.path().join("data.txt");

        let mut sink = FileSink;
        sink.persist("first", &destination).unwrap();
        sink.persist("second", &destination).unwrap();

        assert_eq!(fs::read_to_string(&destination).unwrap(), "second");
    }

    #[test]
    fn test_file_sink_reports_destination_on_failure() {
        let dir = tempdir().expect("Failed to create temp dir");
        // A directory cannot be written as a file
        let result = FileSink.persist("x", dir.path());

        match result {
            Err(PipelineError::Write { destination, .. }) => {
                assert_eq!(destination, dir.path().display().to_string())
            }
            other => panic!("Expected write error, got {:?}", other),
        }
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.persist("a", Path::new("out/a.txt")).unwrap();
        sink.persist("b", Path::new("out/b.txt")).unwrap();
        sink.persist("c", Path::new("out/a.txt")).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.get(Path::new("out/a.txt")), Some("c"));
        assert_eq!(sink.get(Path::new("out/missing.txt")), None);
    }
}
