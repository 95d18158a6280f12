//! Record emission pipeline: level filter, JSON encoder and sink adapter

use super::config::Config;
use super::entry::LogEntry;
use super::error::Result;
use super::field::Field;
use super::json_encoder::JsonEncoder;
use super::log_level::LogLevel;
use crate::sinks::SharedWriter;

/// The encoder, sink and threshold built from one [`Config`].
///
/// A core is never modified after it is built. Loggers that change level,
/// layout or sink get a new core instead.
#[derive(Debug)]
pub struct EmitterCore {
    level: LogLevel,
    encoder: JsonEncoder,
    sink: SharedWriter,
}

impl EmitterCore {
    pub fn build(config: &Config) -> Self {
        Self {
            level: config.level(),
            encoder: JsonEncoder::new(config.encode_config.clone()),
            sink: config.writer.clone(),
        }
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Encode and write one record synchronously
    pub fn write(&self, entry: &LogEntry, fields: &[Field]) -> Result<()> {
        let record = self.encoder.encode(entry, fields)?;
        self.sink.write_record(&record)?;
        Ok(())
    }

    pub fn sync(&self) -> Result<()> {
        self.sink.sync()?;
        Ok(())
    }
}
