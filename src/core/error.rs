//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Strict level parsing rejected the name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// The process-wide default logger was already set
    #[error("Default logger already initialized")]
    AlreadyInitialized,

    /// Sink could not be opened or written, with the sink label
    #[error("Sink error for '{sink}': {message}")]
    Sink { sink: String, message: String },
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Sink {
            sink: sink.into(),
            message: message.into(),
        }
    }
}
