//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod error;
pub mod fatal;
pub mod formatter;
pub mod log_record;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod severity;
pub mod sink;

pub use config::LoggerConfig;
pub use error::{InvalidSeverity, LoggerError, Result};
pub use fatal::FatalError;
pub use formatter::{FormatFlags, LineFormatter};
pub use log_record::LogRecord;
pub use logger::{ErrorObserver, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use sink::Sink;
