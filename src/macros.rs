//! `format!`-style front ends for the [`Logger`](crate::Logger) methods.
//!
//! Each takes the logger first, then a format string and its arguments:
//!
//! ```
//! use gatelog::{Logger, with_writer};
//!
//! let logger = Logger::new([with_writer(std::io::sink())]).unwrap();
//! gatelog::warning!(logger, "retrying in {}s", 5);
//! ```

/// Logs at `DEBUG` unless the threshold is above it.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

/// Logs at `INFO` regardless of threshold.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Logs at `WARNING` unless the threshold is above it.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(::std::format_args!($($arg)+))
    };
}

/// Logs at `ERROR`.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Logs at `ERROR`, then exits the process with status 1.
#[macro_export]
macro_rules! fatal_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_error(::std::format_args!($($arg)+))
    };
}

/// Logs at `ERROR`, then panics with the formatted message.
#[macro_export]
macro_rules! panic_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic_error(::std::format_args!($($arg)+))
    };
}
