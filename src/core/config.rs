//! Serializable logger configuration
//!
//! Lets a host keep logger settings next to its own configuration:
//!
//! ```
//! use leveled_logger::{LoggerConfig, Severity};
//!
//! let config = LoggerConfig::from_json(r#"{ "minimum_severity": "DEBUG", "caller_depth": 1 }"#)
//!     .unwrap();
//! assert_eq!(config.minimum_severity, Severity::Debug);
//! assert!(!config.flags.date);
//! ```

use super::error::Result;
use super::formatter::FormatFlags;
use super::severity::Severity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub minimum_severity: Severity,
    /// Frames above the logging call to annotate DEBUG lines with; 0 disables
    pub caller_depth: usize,
    pub flags: FormatFlags,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
