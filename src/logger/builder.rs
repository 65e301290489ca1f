//! Chained alternative to a `Vec` of option functions; `build` runs the same fold.

use super::Logger;
use super::options::{OptFn, with_file, with_level, with_threshold, with_writer};
use crate::level::Level;
use std::io::Write;
use std::path::PathBuf;

/// Collects option functions in call order.
#[derive(Default)]
pub struct LoggerBuilder {
    opts: Vec<OptFn>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(self, level: Level) -> Self {
        self.option(with_threshold(level))
    }

    /// Parsed at `build`, so an invalid name surfaces there.
    #[must_use]
    pub fn level_name(self, name: impl Into<String>) -> Self {
        self.option(with_level(name))
    }

    #[must_use]
    pub fn writer(self, destination: impl Write + Send + 'static) -> Self {
        self.option(with_writer(destination))
    }

    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.option(with_file(path))
    }

    /// Custom transformations run in sequence with the built-in ones.
    #[must_use]
    pub fn option(mut self, opt: OptFn) -> Self {
        self.opts.push(opt);
        self
    }

    /// # Errors
    /// The first error returned by any collected option.
    pub fn build(self) -> Result<Logger, crate::Error> {
        Logger::new(self.opts)
    }
}
