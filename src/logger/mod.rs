//! The leveled façade over one [`LineWriter`].
//!
//! A logger is built by folding option functions over a default
//! [`Options`]; after that its threshold never changes. Every call that passes
//! its gate rewrites the writer's prefix and flags for its own level and then
//! writes one line, all while holding the writer's lock.

mod builder;
mod from_config;
mod options;

pub use builder::LoggerBuilder;
pub use options::{OptFn, Options, with_file, with_level, with_threshold, with_writer};

use crate::fmt::Flags;
use crate::level::Level;
use crate::output::LineWriter;
use std::fmt;
use std::panic::Location;
use std::process;

/// Header fields each level writes in front of its message.
#[must_use]
pub const fn line_flags(level: Level) -> Flags {
    match level {
        Level::Debug => Flags::DATE.union(Flags::TIME).union(Flags::LONG_FILE),
        Level::Info => Flags::TIME,
        Level::Warning | Level::Error => Flags::TIME.union(Flags::LONG_FILE),
    }
}

/// Safe to share across threads: the prefix/flags/write sequence of one call
/// runs under the writer's lock, so a line always carries its own level's header.
#[derive(Debug, Default)]
pub struct Logger {
    opts: Options,
}

impl Logger {
    /// Applies `opts` in order to the default options. The first failing
    /// option aborts construction and its error is returned.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] from [`with_level`], [`crate::Error::Io`]
    /// from [`with_file`], or whatever a custom option returns.
    pub fn new<I>(opts: I) -> Result<Self, crate::Error>
    where
        I: IntoIterator<Item = OptFn>,
    {
        let opts = opts
            .into_iter()
            .try_fold(Options::default(), |acc, apply| apply(acc))?;
        Ok(Self { opts })
    }

    /// Stepwise alternative to passing a list of option functions.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_options(opts: Options) -> Self {
        Self { opts }
    }

    /// The threshold gated calls are compared against.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.opts.level
    }

    /// The shared writer; its prefix and flags reflect the last emitted call.
    #[must_use]
    pub const fn writer(&self) -> &LineWriter {
        &self.opts.writer
    }

    /// Suppressed when the threshold is above `Debug`.
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        if self.opts.level > Level::Debug {
            return;
        }
        self.emit(Level::Debug, Location::caller(), args);
    }

    /// Never suppressed: `info` has no threshold gate, unlike the other levels.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, Location::caller(), args);
    }

    /// Suppressed when the threshold is above `Warning`.
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        if self.opts.level > Level::Warning {
            return;
        }
        self.emit(Level::Warning, Location::caller(), args);
    }

    /// Suppressed when the threshold is above `Error`, which no threshold is.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        if self.opts.level > Level::Error {
            return;
        }
        self.emit(Level::Error, Location::caller(), args);
    }

    /// Writes an `ERROR ` line, then exits the process with status 1.
    #[track_caller]
    pub fn fatal_error(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Level::Error, Location::caller(), args);
        process::exit(1)
    }

    /// Writes an `ERROR ` line, then panics with the formatted message as a
    /// `String` payload.
    #[track_caller]
    pub fn panic_error(&self, args: fmt::Arguments<'_>) -> ! {
        let msg = args.to_string();
        self.emit_str(Level::Error, Location::caller(), &msg);
        std::panic::panic_any(msg)
    }

    fn emit(&self, level: Level, location: &Location<'_>, args: fmt::Arguments<'_>) {
        // Formatted before locking: an argument may itself log through this logger.
        let msg = args.to_string();
        self.emit_str(level, location, &msg);
    }

    fn emit_str(&self, level: Level, location: &Location<'_>, msg: &str) {
        let mut line = self.opts.writer.lock();
        line.set_prefix(level.label());
        line.set_flags(line_flags(level));
        // A broken sink must not turn a log call into a failure.
        let _ = line.output_str(Some(location), msg);
    }
}
