//! # Leveled Logger
//!
//! A synchronous, single-sink leveled logger for command-line programs.
//!
//! ## Features
//!
//! - **Seven severities**: DEBUG, INFO, SUCCESS, NOTICE, WARN, ERROR, FATAL
//! - **Terminal aware**: colored labels on a terminal, plain text when redirected
//! - **Caller annotation**: DEBUG lines can carry the `file:line` of the call
//! - **Typed fatal contract**: FATAL yields a [`FatalError`] that a top-level
//!   harness turns into an exit status
//! - **Thread safe**: one lock per logger, lines never interleave
//!
//! ## Example
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::builder()
//!     .minimum_severity(Severity::Debug)
//!     .output(buffer.clone())
//!     .build();
//!
//! info!(logger, "hello {}", "world");
//! assert!(buffer.contents().contains("hello world"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub use crate::core::fatal;

pub mod prelude {
    pub use crate::core::{
        ErrorObserver, FatalError, FormatFlags, LogRecord, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Result, Severity, Sink,
    };
    pub use crate::sinks::{SharedBuffer, WriterSink};
}

pub use crate::core::{
    ErrorObserver, FatalError, FormatFlags, InvalidSeverity, LineFormatter, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Severity, Sink,
};
pub use global::logger;
pub use sinks::{SharedBuffer, WriterSink};
