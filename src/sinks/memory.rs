//! In-memory sink

use super::shared_writer::SharedWriter;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Growable byte buffer sink. Clones share the same buffer, so a test can
/// hand one clone to a logger and read records back through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written records split on line endings
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<MemorySink> for SharedWriter {
    fn from(sink: MemorySink) -> Self {
        SharedWriter::with_label(sink, "memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_roundtrip() {
        let sink = MemorySink::new();
        let mut handle = sink.clone();

        assert!(sink.is_empty());
        handle.write_all(b"first\nsecond\n").unwrap();

        assert_eq!(sink.contents(), "first\nsecond\n");
        assert_eq!(sink.lines(), vec!["first", "second"]);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_into_shared_writer() {
        let sink = MemorySink::new();
        let writer: SharedWriter = sink.clone().into();
        assert_eq!(writer.label(), "memory");

        writer.write_record(b"x\n").unwrap();
        assert_eq!(sink.lines(), vec!["x"]);
    }
}
