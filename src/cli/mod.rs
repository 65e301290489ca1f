//! Command-line front end: write one leveled line from a shell script.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Severity (or terminating variant) to emit the message at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLevel {
    Debug,
    Info,
    Warning,
    Error,
    /// `ERROR` line, then exit status 1.
    Fatal,
    /// `ERROR` line, then panic.
    Panic,
}

/// gatelog - Write one leveled log line.
#[derive(Debug, Parser)]
#[command(
    name = "gatelog",
    version,
    about = "Write one leveled log line from the command line"
)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Threshold override: DEBUG, INFO, WARNING or ERROR
    #[arg(short, long, value_name = "NAME")]
    pub threshold: Option<String>,
    /// Append to this file instead of the configured target
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Show gatelog's own diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
    /// Level to log at
    #[arg(value_enum)]
    pub level: CliLevel,
    /// Message words, joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

/// Resolves config and flag overrides into a logger. Flags win over the file.
///
/// # Errors
/// Config loading errors or an invalid threshold/target.
pub fn build_logger(cli: &Cli) -> Result<Logger, crate::Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(threshold) = &cli.threshold {
        threshold.clone_into(&mut config.general.level);
    }
    if let Some(file) = &cli.file {
        config.output.target = "file".to_string();
        config.output.path = Some(file.to_string_lossy().into_owned());
    }

    Logger::from_config(&config)
}

/// Runs one invocation. `Fatal` and `Panic` never return.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    internal::init(if cli.verbose {
        Level::Debug
    } else {
        Level::Warning
    });

    let logger = match build_logger(cli) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("gatelog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let msg = cli.message.join(" ");
    match cli.level {
        CliLevel::Debug => logger.debug(format_args!("{msg}")),
        CliLevel::Info => logger.info(format_args!("{msg}")),
        CliLevel::Warning => logger.warning(format_args!("{msg}")),
        CliLevel::Error => logger.error(format_args!("{msg}")),
        CliLevel::Fatal => logger.fatal_error(format_args!("{msg}")),
        CliLevel::Panic => logger.panic_error(format_args!("{msg}")),
    }

    ExitCode::SUCCESS
}
