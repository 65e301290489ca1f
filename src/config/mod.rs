//! TOML configuration loading and its translation into option functions.

mod structs;

pub use structs::{GeneralConfig, OutputConfig};

use crate::internal;
use crate::logger::{OptFn, with_file, with_level, with_writer};
use crate::output::expand_path;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "gatelog.log";

/// An empty file must still produce a working logger; `#[serde(default)]`
/// on every section makes zero-config work.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Loads `config.toml` from the platform config directory.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(&format!(
                "Config file not found at {}, using defaults",
                path.display()
            ));
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::debug(&format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Default location of the config file.
    ///
    /// # Errors
    /// [`crate::Error::ConfigDirNotFound`] when no home directory is known.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "gatelog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Log file used for `target = "file"`.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        if let Some(path) = &self.output.path {
            return expand_path(path);
        }
        directories::ProjectDirs::from("", "", "gatelog").map_or_else(
            || {
                internal::warning("No state directory found, logging to the working directory");
                PathBuf::from(LOG_FILE)
            },
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join(LOG_FILE)
            },
        )
    }

    /// Option functions equivalent to this config, threshold first.
    ///
    /// # Errors
    /// [`crate::Error::InvalidTarget`] for an unknown `output.target`. An
    /// invalid level is reported when the options are applied.
    pub fn options(&self) -> Result<Vec<OptFn>, crate::Error> {
        let destination = match self.output.target.as_str() {
            "stdout" => with_writer(io::stdout()),
            "stderr" => with_writer(io::stderr()),
            "file" => with_file(self.file_path()),
            other => return Err(crate::Error::InvalidTarget(other.to_string())),
        };
        Ok(vec![with_level(self.general.level.clone()), destination])
    }
}
