//! Severity definitions
//!
//! Every severity carries two numbers:
//!
//! - a **code**, its declaration index, used when a level arrives as a raw
//!   integer from untyped configuration;
//! - a **rank**, used for filtering. `Ord` follows the rank.
//!
//! Ranks, lowest to highest: `DEBUG < INFO < SUCCESS < NOTICE < WARN < ERROR < FATAL`.
//! `SUCCESS` and `NOTICE` are non-error operator messages and sit between
//! `INFO` and `WARN`. `FATAL` is always the top rank, so no valid minimum can
//! suppress it.

use super::error::InvalidSeverity;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// SGR parameters for FATAL's dark-red (palette 88) background. Spelled out so
/// the escape does not depend on the terminal's truecolor support.
pub const FATAL_BACKGROUND: &str = "48;5;88";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Success = 5,
    Notice = 6,
}

impl Severity {
    /// All severities in declaration (code) order.
    pub const ALL: [Severity; 7] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Success,
        Severity::Notice,
    ];

    /// Raw numeric code (declaration index).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Filtering rank. Higher ranks are more important.
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Debug => 0,
            Severity::Info => 1,
            Severity::Success => 2,
            Severity::Notice => 3,
            Severity::Warn => 4,
            Severity::Error => 5,
            Severity::Fatal => 6,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Warn),
            3 => Some(Severity::Error),
            4 => Some(Severity::Fatal),
            5 => Some(Severity::Success),
            6 => Some(Severity::Notice),
            _ => None,
        }
    }

    /// Returns true iff `code` names one of the seven severities.
    pub fn is_valid_code(code: i64) -> bool {
        u8::try_from(code).ok().and_then(Self::from_code).is_some()
    }

    /// Total order by rank.
    #[inline]
    pub fn compare(a: Severity, b: Severity) -> Ordering {
        a.rank().cmp(&b.rank())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Success => "SUCCESS",
            Severity::Notice => "NOTICE",
        }
    }

    /// Bracketed label as it appears in an emitted line, e.g. `[WARN]`.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Debug => "[DEBUG]",
            Severity::Info => "[INFO]",
            Severity::Warn => "[WARN]",
            Severity::Error => "[ERROR]",
            Severity::Fatal => "[FATAL]",
            Severity::Success => "[SUCCESS]",
            Severity::Notice => "[NOTICE]",
        }
    }

    /// Whether lines of this severity carry the caller site.
    #[inline]
    pub const fn shows_caller(self) -> bool {
        matches!(self, Severity::Debug)
    }

    /// Label color. FATAL's entry is nominal: its label is painted with the
    /// fixed 256-color background [`FATAL_BACKGROUND`] instead.
    pub fn color(self) -> Color {
        match self {
            Severity::Debug => Color::Blue,
            Severity::Info => Color::BrightGreen,
            Severity::Warn => Color::BrightYellow,
            Severity::Error => Color::BrightRed,
            Severity::Fatal => Color::Red,
            Severity::Success => Color::Green,
            Severity::Notice => Color::Yellow,
        }
    }

    /// SGR parameters for the label style. FATAL paints the background.
    pub fn ansi_code(self) -> Cow<'static, str> {
        match self {
            Severity::Fatal => Cow::Borrowed(FATAL_BACKGROUND),
            _ => self.color().to_fg_str(),
        }
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        Severity::compare(*self, *other)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = InvalidSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            "SUCCESS" => Ok(Severity::Success),
            "NOTICE" => Ok(Severity::Notice),
            _ => Err(InvalidSeverity::new(s)),
        }
    }
}

impl TryFrom<&str> for Severity {
    type Error = InvalidSeverity;

    fn try_from(s: &str) -> Result<Self, InvalidSeverity> {
        s.parse()
    }
}

impl TryFrom<String> for Severity {
    type Error = InvalidSeverity;

    fn try_from(s: String) -> Result<Self, InvalidSeverity> {
        s.parse()
    }
}

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(code: u8) -> Result<Self, InvalidSeverity> {
        Self::from_code(code).ok_or_else(|| InvalidSeverity::new(code))
    }
}

impl TryFrom<i32> for Severity {
    type Error = InvalidSeverity;

    fn try_from(code: i32) -> Result<Self, InvalidSeverity> {
        Self::try_from(i64::from(code))
    }
}

impl TryFrom<i64> for Severity {
    type Error = InvalidSeverity;

    fn try_from(code: i64) -> Result<Self, InvalidSeverity> {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| InvalidSeverity::new(code))
    }
}
