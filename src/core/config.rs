//! Logger configuration value object

use super::encoder_config::EncoderConfig;
use super::log_level::{resolve_level, LogLevel};
use crate::sinks::SharedWriter;

/// Level name, output sink and encoding layout of a logger.
///
/// `Clone` copies the level name and layout and shares the sink handle, so a
/// cloned configuration can be changed freely without touching the original.
///
/// # Example
///
/// ```
/// use common_logger::{Config, LogLevel};
///
/// let base = Config::default();
/// let verbose = base.with_log_level("debug");
///
/// assert_eq!(base.level(), LogLevel::Info);
/// assert_eq!(verbose.level(), LogLevel::Debug);
/// assert!(base.writer.ptr_eq(&verbose.writer));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// One of `debug`, `info`, `warn`, `error`; anything else means `info`
    pub log_level: String,
    pub writer: SharedWriter,
    pub encode_config: EncoderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info.to_lowercase_str().to_string(),
            writer: SharedWriter::stdout(),
            encode_config: EncoderConfig::default(),
        }
    }
}

impl Config {
    pub fn new(
        log_level: impl Into<String>,
        writer: SharedWriter,
        encode_config: EncoderConfig,
    ) -> Self {
        Self {
            log_level: log_level.into(),
            writer,
            encode_config,
        }
    }

    /// Resolved severity threshold
    pub fn level(&self) -> LogLevel {
        resolve_level(&self.log_level)
    }

    #[must_use]
    pub fn with_log_level(&self, log_level: impl Into<String>) -> Self {
        Self {
            log_level: log_level.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_writer(&self, writer: SharedWriter) -> Self {
        Self {
            writer,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_encode_config(&self, encode_config: EncoderConfig) -> Self {
        Self {
            encode_config,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.level(), LogLevel::Info);
        assert_eq!(config.writer.label(), "stdout");
        assert_eq!(config.encode_config, EncoderConfig::default());
    }

    #[test]
    fn test_unknown_level_name_resolves_to_info() {
        let config = Config::default().with_log_level("loud");
        assert_eq!(config.log_level, "loud");
        assert_eq!(config.level(), LogLevel::Info);
    }

    #[test]
    fn test_overrides_leave_original_untouched() {
        let base = Config::default();
        let sink = SharedWriter::from(MemorySink::new());

        let by_level = base.with_log_level("error");
        let by_writer = base.with_writer(sink.clone());
        let by_layout =
            base.with_encode_config(EncoderConfig::default().with_message_key("message"));

        assert_eq!(base.log_level, "info");
        assert_eq!(base.encode_config.message_key, "msg");
        assert!(!base.writer.ptr_eq(&sink));

        assert_eq!(by_level.level(), LogLevel::Error);
        assert!(by_level.writer.ptr_eq(&base.writer));

        assert!(by_writer.writer.ptr_eq(&sink));
        assert_eq!(by_writer.log_level, "info");

        assert_eq!(by_layout.encode_config.message_key, "message");
        assert_eq!(by_layout.log_level, "info");
    }
}
