//! Line formatting
//!
//! Produces the exact bytes written for one record:
//!
//! - interactive: `12:04:05.123 \x1b[92m[INFO]\x1b[0m message\n`
//! - plain: `12:04:05.123 [INFO] message\n`
//!
//! DEBUG lines end with ` | file.rs:42` when a caller site was resolved.

use super::log_record::LogRecord;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const ESC: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// Raw formatting flags
///
/// # Examples
///
/// ```
/// use leveled_logger::core::FormatFlags;
///
/// let flags = FormatFlags::new().with_date(true).with_utc(true);
/// assert!(flags.date);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatFlags {
    /// Prefix `YYYY/MM/DD` before the time (plain output only)
    pub date: bool,
    /// Render timestamps in UTC instead of local time
    pub utc: bool,
    /// Escape `\n`, `\r` and `\t` in the message body
    pub escape_newlines: bool,
}

impl FormatFlags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_date(mut self, date: bool) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    #[must_use]
    pub fn with_escape_newlines(mut self, escape: bool) -> Self {
        self.escape_newlines = escape;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter {
    flags: FormatFlags,
}

impl LineFormatter {
    pub fn new(flags: FormatFlags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    /// Format one record for a sink that is (or is not) a terminal.
    pub fn format(&self, record: &LogRecord, interactive: bool) -> String {
        let mut line = String::with_capacity(record.message.len() + 48);

        line.push_str(&self.timestamp(&record.timestamp, interactive));
        line.push(' ');

        let label = record.severity.label();
        if interactive {
            let _ = write!(line, "{}{}m{}{}", ESC, record.severity.ansi_code(), label, RESET);
        } else {
            line.push_str(label);
        }
        line.push(' ');

        if self.flags.escape_newlines {
            line.push_str(&escape_message(&record.message));
        } else {
            line.push_str(&record.message);
        }

        if record.severity.shows_caller() {
            if let Some(site) = record.caller_site.as_deref() {
                line.push_str(" | ");
                line.push_str(site);
            }
        }

        line.push('\n');
        line
    }

    fn timestamp(&self, timestamp: &DateTime<Utc>, interactive: bool) -> String {
        let pattern = if self.flags.date && !interactive {
            "%Y/%m/%d %H:%M:%S%.3f"
        } else {
            "%H:%M:%S%.3f"
        };

        if self.flags.utc {
            timestamp.format(pattern).to_string()
        } else {
            timestamp.with_timezone(&Local).format(pattern).to_string()
        }
    }
}

fn escape_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
