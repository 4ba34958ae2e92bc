//! Error types for the logger system

use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation} ({sink}): {source}")]
    IoOperation {
        operation: String,
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unknown severity value
    #[error(transparent)]
    InvalidSeverity(#[from] InvalidSeverity),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        sink: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            sink: sink.into(),
            source,
        }
    }
}

/// A raw value that does not name any severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid severity: '{value}'")]
pub struct InvalidSeverity {
    value: String,
}

impl InvalidSeverity {
    pub fn new(value: impl fmt::Display) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// The rejected value, rendered as text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: LoggerError = InvalidSeverity::new(42).into();
        assert_eq!(err.to_string(), "Invalid severity: '42'");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoggerError = json_err.into();
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing log line", "stdout", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log line"));
        assert!(err.to_string().contains("stdout"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
