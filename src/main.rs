//! Muestrear CLI
//!
//! Single-command entry point for the muestrear library.
//!
//! # Usage
//!
//! ```bash
//! # Keep 100 classes with 50 items each and 2000 validation items
//! muestrear -i ./imagenet -o ./subset -c 100 -n 50 -N 2000
//!
//! # Keep 10% of every class and 25% of the validation set
//! muestrear -i ./imagenet -o ./subset -p 0.1 -P 0.25
//!
//! # Reproducible run
//! muestrear -i ./imagenet -o ./subset -c 10 -n 10 --seed 42
//!
//! # Plan only, copy nothing
//! muestrear -i ./imagenet -o ./subset -c 10 --dry-run
//! ```

use clap::Parser;
use muestrear::cli::{run_subset, LogLevel};
use muestrear::config::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configure output based on verbose/quiet flags
    let level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match run_subset(cli, level) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
