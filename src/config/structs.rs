//! Configuration struct definitions.

use crate::fmt::MAX_ENTRY_SIZE;
use crate::output::DEFAULT_MAX_FILE_COUNT;
use serde::Deserialize;

/// Settings that apply regardless of destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Least severe priority still written.
    pub threshold: String,
    /// Header fields, any of date, time, mark, thread, priority.
    pub header: Vec<String>,
    /// Masking mode; only "complete" exists.
    pub masking: String,
    /// Per-record cap in bytes, newline included.
    pub max_entry_size: usize,
    /// Threshold for ringlog's own stderr diagnostics; overridden by `RINGLOG_INTERNAL`.
    pub internal: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            threshold: "info".to_string(),
            header: ["date", "time", "mark", "priority"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            masking: "complete".to_string(),
            max_entry_size: MAX_ENTRY_SIZE,
            internal: None,
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Mirror records to stdout.
    pub enabled: bool,
}

/// Rotating file set configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable file output.
    pub enabled: bool,
    /// Directory of the file set; `~` is expanded.
    pub dir: String,
    /// Base name, files are `{name}-{index}.log`.
    pub name: String,
    /// Per-file limit (e.g. "512K", "10M").
    pub max_file_size: String,
    /// Number of files in the ring.
    pub max_file_count: usize,
    /// Resume the existing set on startup instead of truncating it.
    pub append: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        let dir = directories::ProjectDirs::from("", "", "ringlog").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: true,
            dir,
            name: "ringlog".to_string(),
            max_file_size: "10M".to_string(),
            max_file_count: DEFAULT_MAX_FILE_COUNT,
            append: true,
        }
    }
}
