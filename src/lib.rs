//! # Common Logger
//!
//! A structured logging facade that writes one JSON object per record.
//!
//! ## Features
//!
//! - **Immutable Loggers**: `with_level`, `with_writer`, `with_encoding`,
//!   `with_name`, `with_options` and `with_fields` derive new loggers and
//!   never touch the original
//! - **Configurable Layout**: key names, line ending and level, time,
//!   duration and caller encoders
//! - **Forgiving Levels**: unknown level names fall back to `info`
//! - **Thread Safe**: loggers are `Send + Sync` and records never interleave
//!
//! ## Example
//!
//! ```
//! use common_logger::prelude::*;
//!
//! let buffer = MemorySink::new();
//! let logger = Logger::new(Config::new("warn", buffer.clone().into(), EncoderConfig::default()));
//!
//! logger.info("skipped");
//! logger.warn("disk almost full");
//!
//! let line = &buffer.lines()[0];
//! assert!(line.contains("\"level\":\"WARN\""));
//! assert!(line.contains("\"msg\":\"disk almost full\""));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        default_logger, init_default_logger, resolve_level, Config, EncoderConfig, Field,
        FieldValue, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerOption, Result,
    };
    pub use crate::sinks::{MemorySink, SharedWriter};
}

pub use crate::core::{
    default_logger, init_default_logger, resolve_level, standard_logger, CallerEncoder, Config,
    DurationEncoder, EncoderConfig, Field, FieldValue, LevelEncoder, LogLevel, Logger,
    LoggerBuilder, LoggerError, LoggerOption, Result, TimeEncoder,
};
pub use crate::sinks::{FileSink, MemorySink, SharedWriter};
