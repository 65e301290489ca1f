//! Usage:
//!   gatelog [--config PATH] [--threshold NAME] [--file PATH] <LEVEL> <MESSAGE>...
//!
//! LEVEL is one of debug, info, warning, error, fatal, panic.

use clap::Parser;
use gatelog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
