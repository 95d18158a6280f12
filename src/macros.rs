//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and pass the calling
//! module's path along with the record. The module path is written under the
//! layout's `function_key`, which the default layout leaves empty.
//!
//! # Examples
//!
//! ```
//! use common_logger::prelude::*;
//! use common_logger::info;
//!
//! let buffer = MemorySink::new();
//! let logger = Logger::builder().writer(buffer.clone().into()).build();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert!(buffer.contents().contains("Server listening on port 8080"));
//! ```

/// Log a message at the given level with automatic formatting.
///
/// The message is only formatted when the level is enabled.
///
/// # Examples
///
/// ```
/// # use common_logger::prelude::*;
/// # let logger = Logger::builder().writer(MemorySink::new().into()).build();
/// use common_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log_from_module(level, module_path!(), format!($($arg)+));
        }
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use common_logger::prelude::*;
/// # let logger = Logger::builder().log_level("debug").writer(MemorySink::new().into()).build();
/// use common_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use common_logger::prelude::*;
/// # let logger = Logger::builder().writer(MemorySink::new().into()).build();
/// use common_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
