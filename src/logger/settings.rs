//! The full parameter set a logger is opened with, as one value.

use crate::fmt::{HeaderMask, MAX_ENTRY_SIZE, MaskingMode};
use crate::level::Priority;
use crate::output::{DEFAULT_MAX_FILE_COUNT, DEFAULT_MAX_FILE_SIZE};
use std::fmt;
use std::str::FromStr;

/// Destinations, each switched on or off independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputMode {
    pub console: bool,
    pub file: bool,
}

impl OutputMode {
    pub const CONSOLE: Self = Self {
        console: true,
        file: false,
    };
    pub const FILE: Self = Self {
        console: false,
        file: true,
    };
    pub const BOTH: Self = Self {
        console: true,
        file: true,
    };
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::FILE
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.console, self.file) {
            (true, true) => f.write_str("both"),
            (true, false) => f.write_str("console"),
            (false, true) => f.write_str("file"),
            (false, false) => f.write_str("none"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" | "stdout" => Ok(Self::CONSOLE),
            "file" => Ok(Self::FILE),
            "both" => Ok(Self::BOTH),
            "none" => Ok(Self {
                console: false,
                file: false,
            }),
            other => Err(crate::Error::InvalidConfig(format!(
                "unknown output mode: '{other}'"
            ))),
        }
    }
}

/// Everything [`crate::Logger::open`] and [`crate::registry::create`] need.
///
/// ```
/// use ringlog::{OutputMode, Priority, Settings};
///
/// let settings = Settings {
///     output: OutputMode::BOTH,
///     threshold: Priority::Warning,
///     ..Settings::new("/var/log/myapp", "myapp")
/// };
/// assert_eq!(settings.max_file_count, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dir: String,
    pub name: String,
    /// 0 selects [`DEFAULT_MAX_FILE_SIZE`].
    pub max_file_size: u64,
    /// 0 selects [`DEFAULT_MAX_FILE_COUNT`].
    pub max_file_count: usize,
    pub output: OutputMode,
    pub header: HeaderMask,
    pub threshold: Priority,
    pub masking: MaskingMode,
    pub append: bool,
    /// Per-record cap, newline included.
    pub max_entry_size: usize,
}

impl Settings {
    #[must_use]
    pub fn new(dir: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_file_count: DEFAULT_MAX_FILE_COUNT,
            output: OutputMode::default(),
            header: HeaderMask::DEFAULT,
            threshold: Priority::Info,
            masking: MaskingMode::Complete,
            append: true,
            max_entry_size: MAX_ENTRY_SIZE,
        }
    }

    /// Rejects settings that could never open a file set.
    ///
    /// # Errors
    /// [`crate::Error::InvalidConfig`] for an empty directory or name, or a zero entry size.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.dir.is_empty() {
            return Err(crate::Error::InvalidConfig(
                "log directory is empty".to_string(),
            ));
        }
        if self.name.is_empty() {
            return Err(crate::Error::InvalidConfig(
                "log file name is empty".to_string(),
            ));
        }
        if self.max_entry_size == 0 {
            return Err(crate::Error::InvalidConfig(
                "max_entry_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
