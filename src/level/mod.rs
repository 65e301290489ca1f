//! Severity levels that gate which calls reach the sink.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a call's level against the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Development-time diagnostics. The most permissive threshold, and the default.
    #[default]
    Debug = 0,
    /// Normal operational milestones.
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warning = 2,
    /// Failures that prevent an operation from completing.
    Error = 3,
}

impl Level {
    /// Line prefix written in front of every message at this level, trailing space included.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG ",
            Self::Info => "INFO ",
            Self::Warning => "WARNING ",
            Self::Error => "ERROR ",
        }
    }

    /// Label for a raw numeric level; values outside the defined range render as nothing.
    #[must_use]
    pub const fn label_of(raw: u8) -> &'static str {
        match Self::from_repr(raw) {
            Some(level) => level.label(),
            None => "",
        }
    }

    #[must_use]
    pub const fn from_repr(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            _ => None,
        }
    }

    /// The name accepted by `FromStr`, without the trailing space of [`Level::label`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Convenience for iteration in help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Debug, Self::Info, Self::Warning, Self::Error]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned by `FromStr` so callers can see which input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input, verbatim.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Exact, case-sensitive match: `"warning"` is rejected just like `"BOGUS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
