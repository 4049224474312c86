//! Severity scale that gates which records reach the outputs.
//!
//! The scale is inverse-ordered: a lower numeric value is a more severe
//! priority, so a threshold admits every priority numerically `<=` itself.

use std::fmt;
use std::str::FromStr;

/// Width of every rendered label, brackets and padding included.
pub const LABEL_WIDTH: usize = 9;

/// Derives `Ord` on the numeric value so `priority > threshold` means "less severe, drop it".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    /// The system is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant conditions.
    Notice = 5,
    /// Informational messages.
    #[default]
    Info = 6,
    /// Debug-level messages.
    Debug = 7,
}

impl Priority {
    /// Lowercase because config files and CLI args use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Fixed-width bracketed header label, always [`LABEL_WIDTH`] bytes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emergency => "[EMERG]  ",
            Self::Alert => "[ALERT]  ",
            Self::Critical => "[CRITIC] ",
            Self::Error => "[ERROR]  ",
            Self::Warning => "[WARN]   ",
            Self::Notice => "[NOTICE] ",
            Self::Info => "[INFO]   ",
            Self::Debug => "[DEBUG]  ",
        }
    }

    /// `true` when a record at this priority passes `threshold`.
    #[must_use]
    pub fn admitted_by(self, threshold: Self) -> bool {
        self <= threshold
    }

    /// Maps the numeric value used by C callers back to the enum.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Emergency),
            1 => Some(Self::Alert),
            2 => Some(Self::Critical),
            3 => Some(Self::Error),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Info),
            7 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Most severe first.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Emergency,
            Self::Alert,
            Self::Critical,
            Self::Error,
            Self::Warning,
            Self::Notice,
            Self::Info,
            Self::Debug,
        ]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown priority" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError(String);

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown priority: '{}'", self.0)
    }
}

impl std::error::Error for ParsePriorityError {}

impl From<ParsePriorityError> for crate::Error {
    fn from(e: ParsePriorityError) -> Self {
        Self::InvalidPriority(e.0)
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emergency" | "emerg" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "critical" | "crit" | "critic" => Ok(Self::Critical),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}
