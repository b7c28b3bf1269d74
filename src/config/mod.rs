//! CLI argument parsing and validation
//!
//! This module provides the command-line interface for muestrear.
//!
//! # Usage
//!
//! ```bash
//! muestrear -i ./imagenet -o ./subset
//! muestrear -i ./imagenet -o ./subset -c 100 -n 50 -N 2000
//! muestrear -i ./imagenet -o ./subset -p 0.1 -P 0.25 --seed 42
//! ```

mod cli;


pub use cli::{parse_args, Cli, OutputFormat};
