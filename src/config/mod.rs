//! TOML configuration loading and conversion into [`Settings`].
//!
//! Values are kept as strings for TOML ergonomics; the `parse_*` methods turn
//! them into the typed values the logger needs and report bad input instead
//! of guessing.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, GeneralConfig};

use crate::fmt::{HeaderMask, MaskingMode};
use crate::internal;
use crate::inventory::parse_size;
use crate::level::Priority;
use crate::logger::{OutputMode, Settings};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Every field has a default, so an empty file still produces a working logger.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

impl Config {
    /// Loads the user's config from the default location, or defaults when absent.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/ringlog/ringlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("ringlog").join("ringlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// [`crate::Error::InvalidPriority`] for an unknown name.
    pub fn parse_threshold(&self) -> Result<Priority, crate::Error> {
        Ok(self.general.threshold.parse::<Priority>()?)
    }

    /// # Errors
    /// [`crate::Error::InvalidConfig`] naming the first unknown field.
    pub fn parse_header(&self) -> Result<HeaderMask, crate::Error> {
        HeaderMask::from_names(&self.general.header)
    }

    /// # Errors
    /// [`crate::Error::InvalidConfig`] for anything other than "complete".
    pub fn parse_masking(&self) -> Result<MaskingMode, crate::Error> {
        self.general.masking.parse()
    }

    /// # Errors
    /// [`crate::Error::InvalidSize`] when the size string is malformed.
    pub fn parse_max_file_size(&self) -> Result<u64, crate::Error> {
        parse_size(&self.file.max_file_size)
            .ok_or_else(|| crate::Error::InvalidSize(self.file.max_file_size.clone()))
    }

    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        OutputMode {
            console: self.console.enabled,
            file: self.file.enabled,
        }
    }

    /// File directory with `~` and environment variables expanded.
    #[must_use]
    pub fn resolved_dir(&self) -> String {
        shellexpand::full(&self.file.dir)
            .map_or_else(|_| self.file.dir.clone(), |dir| dir.into_owned())
    }

    /// Everything parsed and checked at once.
    ///
    /// # Errors
    /// The first field that fails to parse, or [`Settings::validate`].
    pub fn settings(&self) -> Result<Settings, crate::Error> {
        let settings = Settings {
            dir: self.resolved_dir(),
            name: self.file.name.clone(),
            max_file_size: self.parse_max_file_size()?,
            max_file_count: self.file.max_file_count,
            output: self.output_mode(),
            header: self.parse_header()?,
            threshold: self.parse_threshold()?,
            masking: self.parse_masking()?,
            append: self.file.append,
            max_entry_size: self.general.max_entry_size,
        };
        settings.validate()?;
        Ok(settings)
    }
}
