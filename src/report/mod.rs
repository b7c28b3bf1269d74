//! Run summary reporting
//!
//! Counts of found and selected files, printable as text or JSON.


use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::sample::Selection;

/// Per-class availability and selection counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassCount {
    /// Class label
    pub label: String,
    /// Files discovered for this class
    pub available: usize,
    /// Files selected for the output
    pub selected: usize,
}

/// Summary of one subsetting run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubsetReport {
    /// Training files discovered under `train/`
    pub train_files_found: usize,
    /// Validation files discovered under `val/`
    pub val_files_found: usize,
    /// Distinct class labels in the training set
    pub classes_found: usize,
    /// Classes surviving the class quota
    pub classes_selected: usize,
    /// Per-class counts for the selected classes
    pub classes: Vec<ClassCount>,
    /// Training files selected across all classes
    pub train_files_selected: usize,
    /// Validation files selected
    pub val_files_selected: usize,
    /// Destination directory
    pub output_dir: PathBuf,
    /// Whether the run stopped before copying
    pub dry_run: bool,
}

impl SubsetReport {
    /// Build the report for one run
    #[must_use]
    pub fn new(
        train_files_found: usize,
        val_files_found: usize,
        per_class: &BTreeMap<String, Vec<PathBuf>>,
        selection: &Selection,
        output_dir: &Path,
        dry_run: bool,
    ) -> Self {
        let classes = selection
            .train
            .iter()
            .map(|(label, kept)| ClassCount {
                label: label.clone(),
                available: per_class.get(label).map_or(0, Vec::len),
                selected: kept.len(),
            })
            .collect();

        Self {
            train_files_found,
            val_files_found,
            classes_found: per_class.len(),
            classes_selected: selection.train.len(),
            classes,
            train_files_selected: selection.train_len(),
            val_files_selected: selection.val.len(),
            output_dir: output_dir.to_path_buf(),
            dry_run,
        }
    }

    /// Render the human-readable summary
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!(
                "Classes: {} found, {} selected",
                self.classes_found, self.classes_selected
            ),
            format!(
                "Selected {} training files and {} validation files.",
                self.train_files_selected, self.val_files_selected
            ),
            format!("Output dir: {}", self.output_dir.display()),
        ];
        if self.dry_run {
            lines.push("Dry run: nothing will be copied".to_string());
        }
        lines.join("\n")
    }

    /// Render the machine-readable summary
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
