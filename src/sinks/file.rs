//! File sinks

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, IsTerminal};
use std::path::Path;

/// A `File` is interactive when it is a terminal device such as `/dev/tty`.
impl Sink for File {
    fn is_interactive(&self) -> bool {
        IsTerminal::is_terminal(self)
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Buffered writers are never treated as terminals; every line is flushed
/// through them as it is written.
impl Sink for BufWriter<File> {
    fn name(&self) -> &str {
        "buffered-file"
    }
}

/// Open `path` for appending, creating it if missing.
///
/// # Examples
///
/// ```no_run
/// use leveled_logger::{sinks::file, Logger};
///
/// let logger = Logger::with_sink(file::open_append("/var/log/app.log").unwrap());
/// logger.info("appended");
/// ```
pub fn open_append(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            LoggerError::io_operation("opening log file", path.display().to_string(), source)
        })
}
