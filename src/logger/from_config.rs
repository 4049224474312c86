//! Logger construction from ringlog config files.

use super::Logger;
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Builds a logger from the default config file (or defaults when there is none).
    ///
    /// # Errors
    /// Config loading or parsing errors, or the writer failing to open.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        internal::debug("LOGGER", "Building logger from config");
        let config = Config::load()?;
        Self::from_config(&config)
    }

    /// # Errors
    /// The first config field that fails to parse, or the writer failing to open.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        internal::init_with_config(config);
        let settings = config.settings()?;
        internal::debug(
            "LOGGER",
            &format!(
                "Output: {}, threshold: {}, file set: {}/{}-N.log",
                settings.output, settings.threshold, settings.dir, settings.name
            ),
        );
        Self::open(&settings)
    }
}
