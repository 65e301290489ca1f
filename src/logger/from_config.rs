//! Logger construction from gatelog config files.

use super::Logger;
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Builds a logger from an already-loaded config.
    ///
    /// # Errors
    /// Invalid level names or targets in the config, or an unopenable log file.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        internal::debug(&format!(
            "Building logger: level={}, target={}",
            config.general.level, config.output.target
        ));
        Self::new(config.options()?)
    }

    /// Loads the default config file and builds a logger from it.
    ///
    /// # Errors
    /// Config loading errors plus everything [`Logger::from_config`] can return.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        let config = Config::load()?;
        Self::from_config(&config)
    }
}
