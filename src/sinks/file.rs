//! File sink implementation

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only file sink.
///
/// Writes go straight to the file; no buffering happens at this layer.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink(path.display().to_string(), e.to_string()))?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.sync_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::SharedWriter;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_appends() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        fs::write(&log_path, "existing\n")?;

        let writer = SharedWriter::file(&log_path)?;
        writer.write_record(b"appended\n")?;
        writer.sync()?;

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content, "existing\nappended\n");
        assert!(writer.label().starts_with("file:"));
        Ok(())
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = tempdir().expect("tempdir");
        let bad_path = dir.path().join("no/such/dir/app.log");

        let err = FileSink::open(&bad_path).unwrap_err();
        assert!(matches!(err, LoggerError::Sink { .. }));
    }
}
