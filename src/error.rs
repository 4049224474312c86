//! Unified error type for all ringlog operations.
//!
//! Nothing in the crate panics across the logging boundary. Every public
//! operation reports failure through this type and the caller decides whether
//! a lost log line matters.

use std::path::PathBuf;

/// Error type for ringlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing or flushing a record.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Settings rejected before any file was touched (empty directory or name, etc.).
    InvalidConfig(String),
    /// Unknown priority name.
    InvalidPriority(String),
    /// Size string like "10M" that could not be parsed.
    InvalidSize(String),
    /// A directory component could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A log file could not be opened (at init or on rotation).
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A previous rotation failed and left the writer without a file handle.
    NoActiveFile,
    /// The formatted record does not fit the per-entry capacity.
    EntryTooLarge { len: usize, max: usize },
    /// No logger has been created in the registry.
    NotInitialized,
    /// An external handler reported failure.
    Handler(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidConfig(s) => write!(f, "invalid config: {s}"),
            Self::InvalidPriority(s) => write!(f, "unknown priority: '{s}'"),
            Self::InvalidSize(s) => write!(f, "invalid size: '{s}'"),
            Self::CreateDir { path, source } => {
                write!(f, "cannot create directory {}: {source}", path.display())
            }
            Self::Open { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::NoActiveFile => write!(f, "no active log file"),
            Self::EntryTooLarge { len, max } => {
                write!(f, "log entry too large: {len} bytes exceeds {max}")
            }
            Self::NotInitialized => write!(f, "logger not created"),
            Self::Handler(s) => write!(f, "external handler failed: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::CreateDir { source: e, .. } | Self::Open { source: e, .. } => {
                Some(e)
            }
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
