//! Unified error type for all gatelog operations.

use crate::level::ParseLevelError;

/// Error type for gatelog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Log level name not one of `DEBUG`, `INFO`, `WARNING`, `ERROR`.
    InvalidLevel(String),
    /// Unknown output target in config.
    InvalidTarget(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: '{level}'"),
            Self::InvalidTarget(target) => write!(f, "invalid output target: '{target}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
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

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.input().to_string())
    }
}
