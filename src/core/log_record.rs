//! Log record structure

use super::severity::Severity;
use chrono::{DateTime, Utc};

/// One emission, built fresh per call and never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub caller_site: Option<String>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            timestamp: Utc::now(),
            message: message.into(),
            caller_site: None,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attach a caller site. Empty sites are treated as absent.
    #[must_use]
    pub fn with_caller_site(mut self, site: impl Into<String>) -> Self {
        let site = site.into();
        self.caller_site = if site.is_empty() { None } else { Some(site) };
        self
    }
}
