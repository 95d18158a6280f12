//! Process-wide default logger
//!
//! The default is set at most once and never changes afterwards. Callers
//! reach it through [`default_logger`] and derive their own variants from
//! it; nothing in this crate looks it up implicitly.

use super::config::Config;
use super::error::{LoggerError, Result};
use super::logger::Logger;
use super::options::LoggerOption;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Logger used when no default was installed: `info` level, stdout, the
/// default layout and call-site capture.
pub fn standard_logger() -> Logger {
    Logger::new(Config::default()).with_options([LoggerOption::add_caller()])
}

/// Install `logger` as the process-wide default.
///
/// Fails with [`LoggerError::AlreadyInitialized`] when a default exists,
/// including one created on demand by an earlier [`default_logger`] call.
pub fn init_default_logger(logger: Logger) -> Result<&'static Logger> {
    let mut installed = false;
    let current = DEFAULT_LOGGER.get_or_init(|| {
        installed = true;
        logger
    });

    if installed {
        Ok(current)
    } else {
        Err(LoggerError::AlreadyInitialized)
    }
}

/// The process-wide default logger, created from [`standard_logger`] on
/// first use if none was installed.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(standard_logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_standard_logger_settings() {
        let logger = standard_logger();
        assert_eq!(logger.level(), LogLevel::Info);
        assert_eq!(logger.config().writer.label(), "stdout");
        assert!(logger.options().add_caller);
        assert!(logger.name().is_none());
    }

    #[test]
    fn test_default_logger_is_initialized_once() {
        let first = default_logger();
        let second = default_logger();
        assert!(std::ptr::eq(first, second));

        let err = init_default_logger(Logger::default()).unwrap_err();
        assert!(matches!(err, LoggerError::AlreadyInitialized));

        // Derivations never touch the default
        let derived = first.with_level("error");
        assert_eq!(derived.level(), LogLevel::Error);
        assert_eq!(default_logger().level(), LogLevel::Info);
    }
}
