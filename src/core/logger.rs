//! Logger handle: construction, derivation and emission

use super::{
    config::Config,
    emitter::EmitterCore,
    encoder_config::{EncoderConfig, DEFAULT_TIME_LAYOUT},
    entry::{Caller, LogEntry},
    error::{LoggerError, Result},
    field::Field,
    log_level::LogLevel,
    options::{LoggerOption, LoggerOptions},
};
use crate::sinks::SharedWriter;
use chrono::Local;
use std::backtrace::Backtrace;
use std::panic::Location;
use std::sync::Arc;

/// A JSON logger over one [`Config`].
///
/// A `Logger` is never modified after construction. Every `with_*` method
/// returns a new logger and leaves the receiver as it was, so a base logger
/// can be shared across threads and specialised wherever needed.
///
/// # Example
///
/// ```
/// use common_logger::prelude::*;
///
/// let buffer = MemorySink::new();
/// let base = Logger::new(Config::default().with_writer(buffer.clone().into()));
/// let verbose = base.with_level("debug").with_name("worker");
///
/// base.debug("dropped: base logs at info");
/// verbose.debug("kept");
///
/// let lines = buffer.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].contains("\"name\":\"worker\""));
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    core: Arc<EmitterCore>,
    config: Config,
    name: Option<String>,
    options: LoggerOptions,
}

impl Logger {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            core: Arc::new(EmitterCore::build(&config)),
            config,
            name: None,
            options: LoggerOptions::default(),
        }
    }

    /// Build a fresh core for `config`, then assemble the new logger around
    /// it. Name and options carry over.
    fn rebuild(&self, config: Config) -> Self {
        let core = Arc::new(EmitterCore::build(&config));
        Self {
            core,
            config,
            name: self.name.clone(),
            options: self.options.clone(),
        }
    }

    /// Derive a logger with another level name. Unknown names mean `info`.
    ///
    /// The new level is the derived logger's threshold: a floor set earlier
    /// through [`LoggerOption::IncreaseLevel`] does not carry over.
    #[must_use]
    pub fn with_level(&self, log_level: &str) -> Self {
        let mut logger = self.rebuild(self.config.with_log_level(log_level));
        logger.options.level_floor = None;
        logger
    }

    /// Derive a logger with another encoding layout
    #[must_use]
    pub fn with_encoding(&self, encode_config: EncoderConfig) -> Self {
        self.rebuild(self.config.with_encode_config(encode_config))
    }

    /// Derive a logger writing to another sink
    #[must_use]
    pub fn with_writer(&self, writer: SharedWriter) -> Self {
        self.rebuild(self.config.with_writer(writer))
    }

    /// Derive a logger with behaviour options applied on top of the current
    /// core. See [`LoggerOption`] for the application order.
    #[must_use]
    pub fn with_options<I>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        Self {
            core: Arc::clone(&self.core),
            config: self.config.clone(),
            name: self.name.clone(),
            options: self.options.apply(options),
        }
    }

    /// Derive a named logger. Names nest with a `.` separator; an empty
    /// name leaves the logger as it is.
    #[must_use]
    pub fn with_name(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }

        let name = match self.name {
            Some(ref parent) => format!("{}.{}", parent, name),
            None => name.to_string(),
        };

        Self {
            core: Arc::clone(&self.core),
            config: self.config.clone(),
            name: Some(name),
            options: self.options.clone(),
        }
    }

    /// Derive a logger that adds `fields` to every record
    #[must_use]
    pub fn with_fields<I, F>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        let fields = fields.into_iter().map(Into::into).collect();
        self.with_options([LoggerOption::Fields(fields)])
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Effective threshold, including any `IncreaseLevel` option
    pub fn level(&self) -> LogLevel {
        self.options.effective_level(self.core.level())
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }
        self.emit(level, message.into(), None, &[], Location::caller());
    }

    /// Log with fields attached to this record only
    #[track_caller]
    pub fn log_with_fields(&self, level: LogLevel, message: impl Into<String>, fields: &[Field]) {
        if !self.enabled(level) {
            return;
        }
        self.emit(level, message.into(), None, fields, Location::caller());
    }

    /// Entry point of the logging macros, which also know the module path
    #[doc(hidden)]
    #[track_caller]
    pub fn log_from_module(&self, level: LogLevel, module_path: &'static str, message: String) {
        if !self.enabled(level) {
            return;
        }
        self.emit(level, message, Some(module_path), &[], Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    fn emit(
        &self,
        level: LogLevel,
        message: String,
        function: Option<&'static str>,
        fields: &[Field],
        location: &'static Location<'static>,
    ) {
        let mut entry = LogEntry::new(level, message).with_name(self.name());

        if self.options.add_caller {
            let mut caller = Caller::from_location(location);
            caller.function = function;
            entry = entry.with_caller(caller);
        }

        if self.options.wants_stack(level) {
            entry = entry.with_stack(Backtrace::force_capture().to_string());
        }

        let context = &self.options.fields;
        let result = if fields.is_empty() {
            self.core.write(&entry, context)
        } else if context.is_empty() {
            self.core.write(&entry, fields)
        } else {
            let mut all = Vec::with_capacity(context.len() + fields.len());
            all.extend_from_slice(context);
            all.extend_from_slice(fields);
            self.core.write(&entry, &all)
        };

        if let Err(e) = result {
            self.report_write_error(&e);
        }
    }

    fn report_write_error(&self, err: &LoggerError) {
        let line = format!(
            "{} write error: {}\n",
            Local::now().format(DEFAULT_TIME_LAYOUT),
            err
        );
        // Nowhere left to report a failure of the error output itself
        let _ = self.options.error_output.write_record(line.as_bytes());
        let _ = self.options.error_output.sync();
    }

    /// Flush the sink
    pub fn sync(&self) -> Result<()> {
        self.core.sync()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use common_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .log_level("debug")
///     .writer(SharedWriter::stderr())
///     .option(LoggerOption::add_caller())
///     .name("api")
///     .build();
///
/// assert_eq!(logger.level(), LogLevel::Debug);
/// assert_eq!(logger.name(), Some("api"));
/// ```
pub struct LoggerBuilder {
    config: Config,
    options: Vec<LoggerOption>,
    name: Option<String>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            options: Vec::new(),
            name: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_level(mut self, log_level: impl Into<String>) -> Self {
        self.config.log_level = log_level.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer(mut self, writer: SharedWriter) -> Self {
        self.config.writer = writer;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encode_config(mut self, encode_config: EncoderConfig) -> Self {
        self.config.encode_config = encode_config;
        self
    }

    /// Add an option; all options are applied together by `build`
    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LoggerOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.config).with_options(self.options);
        match self.name {
            Some(name) => logger.with_name(&name),
            None => logger,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
