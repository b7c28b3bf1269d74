//! Subset command implementation
//!
//! Runs the whole pipeline: precondition check, discovery, grouping,
//! sampling, reporting, materialization.

use crate::cli::logging::{log, LogLevel};
use crate::config::{Cli, OutputFormat};
use crate::dataset;
use crate::materialize::{self, copy_progress};
use crate::report::SubsetReport;
use crate::sample;

/// Execute one subsetting run.
///
/// The pre-existing-output check runs before any discovery work, so a
/// refused run performs no filesystem writes at all.
pub fn run_subset(cli: Cli, level: LogLevel) -> Result<(), String> {
    materialize::check_output_free(&cli.output_dir).map_err(|e| e.to_string())?;

    let train_dir = cli.imagenet_dir.join("train");
    let val_dir = cli.imagenet_dir.join("val");

    log(level, LogLevel::Normal, "Loading file names");

    let train_files = dataset::discover_split(&train_dir, &cli.extension)
        .map_err(|e| format!("Discovery error: {e}"))?;
    let val_files = dataset::discover_split(&val_dir, &cli.extension)
        .map_err(|e| format!("Discovery error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Found {} training files and {} validation files.",
            train_files.len(),
            val_files.len()
        ),
    );

    log(level, LogLevel::Normal, "Extracting classes");

    let per_class =
        dataset::group_by_class(&train_files).map_err(|e| format!("Grouping error: {e}"))?;

    for (label, bucket) in &per_class {
        log(level, LogLevel::Verbose, &format!("{label}: {}", bucket.len()));
    }

    let options = cli.sample_options();
    let mut rng = options.rng();
    let selection = sample::select(&per_class, &val_files, &options, &mut rng);

    let report = SubsetReport::new(
        train_files.len(),
        val_files.len(),
        &per_class,
        &selection,
        &cli.output_dir,
        cli.dry_run,
    );

    match cli.format {
        OutputFormat::Text => log(level, LogLevel::Normal, &report.to_text()),
        OutputFormat::Json => {
            // Machine output goes to stdout even under --quiet.
            let json = report
                .to_json()
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    if cli.dry_run {
        return Ok(());
    }

    let tree = materialize::create_output_tree(&cli.output_dir).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "Copying train files");
    let train_selected = selection.train_files();
    let progress = copy_progress(train_selected.len() as u64, level == LogLevel::Quiet);
    materialize::copy_into(&train_selected, &tree.train, &progress)
        .map_err(|e| format!("Copy error: {e}"))?;
    progress.finish();

    log(level, LogLevel::Normal, "Copying val files");
    let progress = copy_progress(selection.val.len() as u64, level == LogLevel::Quiet);
    materialize::copy_into(&selection.val, &tree.val, &progress)
        .map_err(|e| format!("Copy error: {e}"))?;
    progress.finish();

    Ok(())
}
