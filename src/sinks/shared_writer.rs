//! Sink adapter around any `Write` destination

use super::file::FileSink;
use crate::core::Result;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Cloneable handle to an output sink.
///
/// Clones refer to the same underlying writer. Each record is written with a
/// single `write_all` while holding the sink's lock, so records from
/// concurrent callers never interleave.
///
/// # Example
///
/// ```
/// use common_logger::sinks::{MemorySink, SharedWriter};
///
/// let buffer = MemorySink::new();
/// let writer = SharedWriter::from(buffer.clone());
///
/// writer.write_record(b"{\"msg\":\"hello\"}\n").unwrap();
/// assert_eq!(buffer.lines(), vec!["{\"msg\":\"hello\"}"]);
/// ```
#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
    label: Arc<str>,
}

impl SharedWriter {
    /// Wrap an arbitrary writer
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_label(writer, "custom")
    }

    /// Wrap a writer and give it a label used in diagnostics
    pub fn with_label<W: Write + Send + 'static>(writer: W, label: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
            label: Arc::from(label),
        }
    }

    pub fn stdout() -> Self {
        Self::with_label(io::stdout(), "stdout")
    }

    pub fn stderr() -> Self {
        Self::with_label(io::stderr(), "stderr")
    }

    /// Open (or create) a file in append mode
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        let sink = FileSink::open(path)?;
        let label = format!("file:{}", sink.path().display());
        Ok(Self::with_label(sink, &label))
    }

    /// Write one encoded record
    pub fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(record)
    }

    /// Flush the underlying writer
    pub fn sync(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether both handles point at the same sink
    pub fn ptr_eq(&self, other: &SharedWriter) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter")
            .field("label", &self.label)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_clones_share_sink() {
        let buffer = MemorySink::new();
        let writer = SharedWriter::from(buffer.clone());
        let clone = writer.clone();

        writer.write_record(b"a\n").unwrap();
        clone.write_record(b"b\n").unwrap();

        assert!(writer.ptr_eq(&clone));
        assert_eq!(buffer.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_distinct_sinks_are_not_equal() {
        let a = SharedWriter::from(MemorySink::new());
        let b = SharedWriter::from(MemorySink::new());
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_write_error_is_returned() {
        let writer = SharedWriter::new(BrokenPipe);
        let err = writer.write_record(b"x\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SharedWriter::stdout().label(), "stdout");
        assert_eq!(SharedWriter::stderr().label(), "stderr");
        assert_eq!(SharedWriter::new(Vec::new()).label(), "custom");
        assert!(format!("{:?}", SharedWriter::stdout()).contains("stdout"));
    }
}
