//! Encoding layout for JSON records
//!
//! [`EncoderConfig`] names every key the JSON encoder writes and picks how
//! levels, timestamps, durations and call sites are rendered. An empty key
//! omits that part of the record entirely.

use super::entry::Caller;
use super::log_level::LogLevel;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Write;
use std::time::Duration;

/// The fixed timestamp pattern of the default layout: `YYYY-MM-DD HH:MM:SS`
pub const DEFAULT_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Line terminator written after every record
pub const DEFAULT_LINE_ENDING: &str = "\n";

/// How the level is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelEncoder {
    /// `INFO`
    #[default]
    Capital,
    /// `info`
    Lowercase,
    /// `INFO` wrapped in ANSI colour codes
    #[cfg(feature = "console")]
    CapitalColor,
    /// `info` wrapped in ANSI colour codes
    #[cfg(feature = "console")]
    LowercaseColor,
}

impl LevelEncoder {
    pub fn encode(&self, level: LogLevel) -> Value {
        let text = match self {
            LevelEncoder::Capital => level.to_str().to_string(),
            LevelEncoder::Lowercase => level.to_lowercase_str().to_string(),
            #[cfg(feature = "console")]
            LevelEncoder::CapitalColor => {
                use colored::Colorize;
                level.to_str().color(level.color_code()).to_string()
            }
            #[cfg(feature = "console")]
            LevelEncoder::LowercaseColor => {
                use colored::Colorize;
                level
                    .to_lowercase_str()
                    .color(level.color_code())
                    .to_string()
            }
        };
        Value::String(text)
    }
}

/// How the record timestamp is rendered
///
/// # Examples
///
/// ```
/// use common_logger::core::TimeEncoder;
/// use chrono::{TimeZone, Utc};
///
/// let time = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimeEncoder::DateTime.encode(&time), "2025-01-08 10:30:45");
/// assert_eq!(TimeEncoder::EpochSeconds.encode(&time), 1736332245);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeEncoder {
    /// `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123+00:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds, as a JSON number
    EpochSeconds,

    /// Unix timestamp in milliseconds, as a JSON number
    EpochMillis,

    /// Unix timestamp in nanoseconds, as a JSON number
    EpochNanos,

    /// Any strftime-compatible pattern
    Layout(String),
}

impl TimeEncoder {
    pub fn encode<Tz>(&self, time: &DateTime<Tz>) -> Value
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimeEncoder::DateTime => {
                Value::String(time.format(DEFAULT_TIME_LAYOUT).to_string())
            }
            TimeEncoder::Iso8601 => {
                Value::String(time.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string())
            }
            TimeEncoder::Rfc3339 => {
                Value::String(time.format("%Y-%m-%dT%H:%M:%S%:z").to_string())
            }
            TimeEncoder::EpochSeconds => Value::from(time.timestamp()),
            TimeEncoder::EpochMillis => Value::from(time.timestamp_millis()),
            TimeEncoder::EpochNanos => match time.timestamp_nanos_opt() {
                Some(nanos) => Value::from(nanos),
                None => Value::Null,
            },
            TimeEncoder::Layout(pattern) => {
                let mut out = String::new();
                // An invalid pattern fails while formatting, not when parsed
                match write!(out, "{}", time.format(pattern)) {
                    Ok(()) => Value::String(out),
                    Err(_) => Value::String(time.to_rfc3339()),
                }
            }
        }
    }
}

/// How duration fields are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationEncoder {
    /// Floating point seconds: `1.5`
    #[default]
    Seconds,
    /// Floating point milliseconds: `1500.0`
    Millis,
    /// Integer nanoseconds: `1500000000`
    Nanos,
    /// Human readable: `1.5s`
    String,
}

impl DurationEncoder {
    pub fn encode(&self, duration: Duration) -> Value {
        match self {
            DurationEncoder::Seconds => float_value(duration.as_secs_f64()),
            DurationEncoder::Millis => float_value(duration.as_nanos() as f64 / 1_000_000.0),
            DurationEncoder::Nanos => {
                Value::from(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
            }
            DurationEncoder::String => Value::String(format!("{:?}", duration)),
        }
    }
}

fn float_value(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// How the call site is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallerEncoder {
    /// `core/logger.rs:42`
    #[default]
    Short,
    /// `src/core/logger.rs:42`
    Full,
}

impl CallerEncoder {
    pub fn encode(&self, caller: &Caller) -> Value {
        match self {
            CallerEncoder::Short => Value::String(caller.trimmed_path()),
            CallerEncoder::Full => Value::String(caller.full_path()),
        }
    }
}

/// Encoding layout of a JSON record
///
/// # Examples
///
/// ```
/// use common_logger::core::{EncoderConfig, LevelEncoder};
///
/// let layout = EncoderConfig::new()
///     .with_message_key("message")
///     .with_level_encoder(LevelEncoder::Lowercase);
///
/// assert_eq!(layout.message_key, "message");
/// assert!(layout.function_key.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncoderConfig {
    pub time_key: String,
    pub level_key: String,
    pub name_key: String,
    pub caller_key: String,
    pub function_key: String,
    pub message_key: String,
    pub stacktrace_key: String,
    pub line_ending: String,
    pub encode_level: LevelEncoder,
    pub encode_time: TimeEncoder,
    pub encode_duration: DurationEncoder,
    pub encode_caller: CallerEncoder,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            time_key: "time".to_string(),
            level_key: "level".to_string(),
            name_key: "name".to_string(),
            caller_key: "caller".to_string(),
            function_key: String::new(),
            message_key: "msg".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            line_ending: DEFAULT_LINE_ENDING.to_string(),
            encode_level: LevelEncoder::Capital,
            encode_time: TimeEncoder::DateTime,
            encode_duration: DurationEncoder::Seconds,
            encode_caller: CallerEncoder::Short,
        }
    }
}

impl EncoderConfig {
    /// Create the default layout
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time_key(mut self, key: impl Into<String>) -> Self {
        self.time_key = key.into();
        self
    }

    #[must_use]
    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.level_key = key.into();
        self
    }

    #[must_use]
    pub fn with_name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = key.into();
        self
    }

    #[must_use]
    pub fn with_caller_key(mut self, key: impl Into<String>) -> Self {
        self.caller_key = key.into();
        self
    }

    #[must_use]
    pub fn with_function_key(mut self, key: impl Into<String>) -> Self {
        self.function_key = key.into();
        self
    }

    #[must_use]
    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    #[must_use]
    pub fn with_stacktrace_key(mut self, key: impl Into<String>) -> Self {
        self.stacktrace_key = key.into();
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, ending: impl Into<String>) -> Self {
        self.line_ending = ending.into();
        self
    }

    #[must_use]
    pub fn with_level_encoder(mut self, encoder: LevelEncoder) -> Self {
        self.encode_level = encoder;
        self
    }

    #[must_use]
    pub fn with_time_encoder(mut self, encoder: TimeEncoder) -> Self {
        self.encode_time = encoder;
        self
    }

    /// Shorthand for a [`TimeEncoder::Layout`] pattern
    #[must_use]
    pub fn with_time_layout(mut self, pattern: &str) -> Self {
        self.encode_time = TimeEncoder::Layout(pattern.to_string());
        self
    }

    #[must_use]
    pub fn with_duration_encoder(mut self, encoder: DurationEncoder) -> Self {
        self.encode_duration = encoder;
        self
    }

    #[must_use]
    pub fn with_caller_encoder(mut self, encoder: CallerEncoder) -> Self {
        self.encode_caller = encoder;
        self
    }
}
