//! Core logger types

pub mod config;
pub mod default_logger;
pub mod emitter;
pub mod encoder_config;
pub mod entry;
pub mod error;
pub mod field;
pub mod json_encoder;
pub mod log_level;
pub mod logger;
pub mod options;

pub use config::Config;
pub use default_logger::{default_logger, init_default_logger, standard_logger};
pub use emitter::EmitterCore;
pub use encoder_config::{
    CallerEncoder, DurationEncoder, EncoderConfig, LevelEncoder, TimeEncoder,
    DEFAULT_LINE_ENDING, DEFAULT_TIME_LAYOUT,
};
pub use entry::{Caller, LogEntry};
pub use error::{LoggerError, Result};
pub use field::{Field, FieldValue};
pub use json_encoder::{JsonEncoder, FIELD_KEY_PREFIX};
pub use log_level::{resolve_level, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use options::{LoggerOption, LoggerOptions};
