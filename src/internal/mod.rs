//! gatelog's own diagnostic logger. Reports config loading and file
//! destination problems through the same line format as user loggers.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points (CLI, tests) race to call `init`. There is no
//! `info` here: `Logger::info` ignores the threshold, and diagnostics must
//! stay quiet unless asked for.

use crate::level::Level;
use crate::logger::{Logger, Options};
use crate::output::LineWriter;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Only the first call takes effect; later calls are no-ops.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        Logger::from_options(Options {
            writer: LineWriter::stderr(),
            level,
        })
    });
    if !was_init {
        debug(&format!("Internal logger ready, threshold {}", level.as_str()));
    }
}

/// Whether `init` has run.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// Startup and file-handling details.
#[track_caller]
pub fn debug(msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.debug(format_args!("{msg}"));
    }
}

/// Fallbacks the user may want to know about (missing config file, etc.).
#[track_caller]
pub fn warning(msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.warning(format_args!("{msg}"));
    }
}

/// I/O failures that are also returned to the caller.
#[track_caller]
pub fn error(msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.error(format_args!("{msg}"));
    }
}
