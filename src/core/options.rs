//! Behaviour options layered on top of a logger's emitter core
//!
//! Options never rebuild the core. They are collected into
//! [`LoggerOptions`] and survive later level, layout or writer changes.

use super::field::Field;
use super::log_level::LogLevel;
use crate::sinks::SharedWriter;
use std::fmt;

/// A single behaviour modifier accepted by `Logger::with_options`.
///
/// Options passed together are applied in a fixed order, whatever order
/// they were given in:
///
/// 1. [`ErrorOutput`](LoggerOption::ErrorOutput)
/// 2. [`Caller`](LoggerOption::Caller)
/// 3. [`Stacktrace`](LoggerOption::Stacktrace)
/// 4. [`IncreaseLevel`](LoggerOption::IncreaseLevel)
/// 5. [`Fields`](LoggerOption::Fields)
///
/// Among options of the same kind the last one wins, except `Fields`, which
/// append.
///
/// # Example
///
/// ```
/// use common_logger::{LoggerOption, LogLevel, Field};
///
/// let options = vec![
///     LoggerOption::add_caller(),
///     LoggerOption::Stacktrace(LogLevel::Error),
///     LoggerOption::Fields(vec![Field::new("service", "billing")]),
/// ];
/// # let _ = options;
/// ```
#[derive(Debug, Clone)]
pub enum LoggerOption {
    /// Sink for reports about failed writes
    ErrorOutput(SharedWriter),

    /// Enable or disable call-site capture
    Caller(bool),

    /// Attach a captured backtrace to records at or above this level
    Stacktrace(LogLevel),

    /// Raise the effective threshold; a level below the current one is ignored
    IncreaseLevel(LogLevel),

    /// Fields added to every record
    Fields(Vec<Field>),
}

impl LoggerOption {
    /// Enable call-site capture
    pub fn add_caller() -> Self {
        LoggerOption::Caller(true)
    }

    fn rank(&self) -> u8 {
        match self {
            LoggerOption::ErrorOutput(_) => 0,
            LoggerOption::Caller(_) => 1,
            LoggerOption::Stacktrace(_) => 2,
            LoggerOption::IncreaseLevel(_) => 3,
            LoggerOption::Fields(_) => 4,
        }
    }
}

impl fmt::Display for LoggerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerOption::ErrorOutput(w) => write!(f, "ErrorOutput({})", w.label()),
            LoggerOption::Caller(enabled) => write!(f, "Caller({})", enabled),
            LoggerOption::Stacktrace(level) => write!(f, "Stacktrace({})", level),
            LoggerOption::IncreaseLevel(level) => write!(f, "IncreaseLevel({})", level),
            LoggerOption::Fields(fields) => write!(f, "Fields({} fields)", fields.len()),
        }
    }
}

/// Option state carried by a logger
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub error_output: SharedWriter,
    pub add_caller: bool,
    pub stacktrace_level: Option<LogLevel>,
    pub level_floor: Option<LogLevel>,
    pub fields: Vec<Field>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            error_output: SharedWriter::stderr(),
            add_caller: false,
            stacktrace_level: None,
            level_floor: None,
            fields: Vec::new(),
        }
    }
}

impl LoggerOptions {
    /// Return a copy with `options` applied in rank order
    #[must_use]
    pub fn apply<I>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        let mut ordered: Vec<LoggerOption> = options.into_iter().collect();
        // Stable sort keeps argument order within one kind
        ordered.sort_by_key(LoggerOption::rank);

        let mut next = self.clone();
        for option in ordered {
            match option {
                LoggerOption::ErrorOutput(writer) => next.error_output = writer,
                LoggerOption::Caller(enabled) => next.add_caller = enabled,
                LoggerOption::Stacktrace(level) => next.stacktrace_level = Some(level),
                LoggerOption::IncreaseLevel(level) => {
                    next.level_floor = Some(match next.level_floor {
                        Some(current) => current.max(level),
                        None => level,
                    });
                }
                LoggerOption::Fields(fields) => next.fields.extend(fields),
            }
        }
        next
    }

    /// Effective threshold given the core's own threshold
    pub fn effective_level(&self, core_level: LogLevel) -> LogLevel {
        match self.level_floor {
            Some(floor) => core_level.max(floor),
            None => core_level,
        }
    }

    pub fn wants_stack(&self, level: LogLevel) -> bool {
        self.stacktrace_level.is_some_and(|min| level >= min)
    }
}
