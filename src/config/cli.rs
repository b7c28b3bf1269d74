//! Core CLI types - the Cli argument struct and output format

use clap::Parser;
use std::path::PathBuf;

use crate::sample::{Quota, SampleOptions};

/// Muestrear: dataset subsetting tool
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "muestrear")]
#[command(version)]
#[command(about = "Subset a flat-layout image classification dataset by random sampling")]
pub struct Cli {
    /// The imagenet data (needs to have train and val subdirectories)
    #[arg(short, long)]
    pub imagenet_dir: PathBuf,

    /// Output directory (must not exist yet)
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Number of classes to extract (default: all)
    #[arg(short = 'c', long)]
    pub n_classes: Option<usize>,

    /// Number of items per class (default: all, unless a percentage is given)
    #[arg(short = 'n', long)]
    pub n_items_per_class: Option<usize>,

    /// Number of validation items (default: all, unless a percentage is given)
    #[arg(short = 'N', long)]
    pub n_validation_items: Option<usize>,

    /// Percentage of training items, applied on each class
    #[arg(short = 'p', long)]
    pub percentage_train: Option<f64>,

    /// Percentage of validation items
    #[arg(short = 'P', long)]
    pub percentage_val: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// File extension to match in train/ and val/ (case-sensitive)
    #[arg(long, default_value = "JPEG")]
    pub extension: String,

    /// Summary output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Plan the subset and print the summary but copy nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Translate the sampling flags into resolved sampling options.
    ///
    /// An explicit count flag wins over a percentage flag for the same
    /// split; a split with neither flag keeps everything.
    #[must_use]
    pub fn sample_options(&self) -> SampleOptions {
        let mut options = SampleOptions::new()
            .classes(Quota::from_flags(self.n_classes, None))
            .train_items(Quota::from_flags(self.n_items_per_class, self.percentage_train))
            .val_items(Quota::from_flags(self.n_validation_items, self.percentage_val));
        if let Some(seed) = self.seed {
            options = options.seed(seed);
        }
        options
    }
}

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
