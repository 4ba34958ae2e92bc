//! Logging macros for ergonomic log message formatting.
//!
//! With format arguments the template goes through `format!`. A template on
//! its own is written verbatim, so `info!(logger, "100% {done}")` needs no
//! escaping.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, success};
//!
//! let logger = Logger::with_sink(SharedBuffer::new());
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Operator-facing outcome
//! success!(logger, "Migrated {} tables", 12);
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::with_sink(SharedBuffer::new());
/// use leveled_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
///
/// In a module that also imports the `log` crate's macros, invoke this one by
/// path. The level macros below always expand to `$crate::log!`.
///
/// ```
/// # use leveled_logger::prelude::*;
/// let buffer = SharedBuffer::new();
/// let logger = Logger::with_sink(buffer.clone());
/// leveled_logger::log!(logger, Severity::Warn, "Retry {} of {}", 1, 3);
/// assert!(buffer.contents().contains("[WARN] Retry 1 of 3"));
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $template:literal, $($arg:tt)+) => {{
        let logger = &$logger;
        let severity = $severity;
        if logger.enabled(severity) {
            logger.log(severity, format!($template, $($arg)+));
        } else {
            logger.metrics().record_suppressed();
        }
    }};
    ($logger:expr, $severity:expr, $message:expr $(,)?) => {
        $logger.log($severity, $message)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::with_sink(SharedBuffer::new());
/// # logger.set_minimum_severity(Severity::Debug);
/// use leveled_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::with_sink(SharedBuffer::new());
/// use leveled_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a success-level message.
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Success, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log a fatal-level message and evaluate to the [`FatalError`](crate::FatalError).
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::with_sink(SharedBuffer::new());
/// use leveled_logger::fatal;
///
/// fn load(logger: &Logger) -> std::result::Result<(), FatalError> {
///     Err(fatal!(logger, "Unable to recover from error: {}", "disk full"))
/// }
///
/// let err = load(&logger).unwrap_err();
/// assert_eq!(err.message(), "Unable to recover from error: disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $template:literal, $($arg:tt)+) => {
        $logger.fatal(format!($template, $($arg)+))
    };
    ($logger:expr, $message:expr $(,)?) => {
        $logger.fatal($message)
    };
}
