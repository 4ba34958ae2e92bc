//! The default process-wide logger
//!
//! Convenience entry points for programs that do not pass a [`Logger`]
//! around. The instance is created on first use, writing to stdout at INFO
//! with caller annotation disabled.
//!
//! ```
//! use leveled_logger::{global, SharedBuffer, Severity};
//!
//! let buffer = SharedBuffer::new();
//! global::set_output(buffer.clone());
//! global::set_minimum_severity(Severity::Debug);
//!
//! global::info("from anywhere");
//! assert!(buffer.contents().contains("from anywhere"));
//! ```

use crate::core::{FatalError, FormatFlags, Logger, Severity, Sink};
use std::fmt;
use std::sync::OnceLock;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
pub fn logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

pub fn set_output(sink: impl Sink + 'static) {
    logger().set_output(sink);
}

pub fn set_caller_depth(depth: usize) {
    logger().set_caller_depth(depth);
}

#[track_caller]
pub fn set_minimum_severity<L>(level: L)
where
    L: TryInto<Severity>,
    L::Error: fmt::Display,
{
    logger().set_minimum_severity(level);
}

pub fn set_flags(flags: FormatFlags) {
    logger().set_flags(flags);
}

#[track_caller]
pub fn debug(message: impl Into<String>) {
    logger().debug(message);
}

#[track_caller]
pub fn info(message: impl Into<String>) {
    logger().info(message);
}

#[track_caller]
pub fn warn(message: impl Into<String>) {
    logger().warn(message);
}

#[track_caller]
pub fn error(message: impl Into<String>) {
    logger().error(message);
}

#[track_caller]
pub fn success(message: impl Into<String>) {
    logger().success(message);
}

#[track_caller]
pub fn notice(message: impl Into<String>) {
    logger().notice(message);
}

#[track_caller]
pub fn fatal(message: impl Into<String>) -> FatalError {
    logger().fatal(message)
}

#[track_caller]
pub fn fatal_unwind(message: impl Into<String>) -> ! {
    logger().fatal_unwind(message)
}
