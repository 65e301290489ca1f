#![forbid(unsafe_code)]

//! `gatelog` - Leveled logging with threshold filtering and per-level line metadata.
//!
//! A [`Logger`] is built by folding option functions over a default
//! configuration (threshold `DEBUG`, output to stdout). Each logging call
//! that passes its gate writes exactly one line whose prefix and header
//! fields depend on the call's level:
//!
//! | call | gated | prefix | header |
//! |---|---|---|---|
//! | `debug` | yes | `DEBUG ` | date, time, file:line |
//! | `info` | no | `INFO ` | time |
//! | `warning` | yes | `WARNING ` | time, file:line |
//! | `error` | yes | `ERROR ` | time, file:line |
//! | `fatal_error` | no | `ERROR ` | time, file:line, then exit(1) |
//! | `panic_error` | no | `ERROR ` | time, file:line, then panic |
//!
//! # Example
//!
//! ```
//! use gatelog::{Logger, with_level, with_writer};
//!
//! let logger = Logger::new([with_level("WARNING"), with_writer(std::io::sink())])?;
//!
//! gatelog::debug!(logger, "suppressed");
//! gatelog::warning!(logger, "disk at {}%", 91);
//! gatelog::info!(logger, "always written");
//! # Ok::<(), gatelog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `gatelog` command-line binary

// Core modules (always available)
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::Flags;
pub use level::{Level, ParseLevelError};
pub use logger::{
    Logger, LoggerBuilder, OptFn, Options, line_flags, with_file, with_level, with_threshold,
    with_writer,
};
pub use output::LineWriter;
