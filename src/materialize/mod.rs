//! Output tree creation and file copying
//!
//! The output directory must not exist when a run starts. Copying keeps
//! only each source file's basename and is sequential; the first failed
//! copy aborts the run and may leave a partially populated tree.

mod error;


pub use error::{MaterializeError, Result};

use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Train/val directory pair of a freshly created output tree
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTree {
    /// Destination for selected training files
    pub train: PathBuf,
    /// Destination for selected validation files
    pub val: PathBuf,
}

/// Refuse to touch a pre-existing output path.
pub fn check_output_free(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        return Err(MaterializeError::OutputExists {
            path: output_dir.to_path_buf(),
        });
    }
    Ok(())
}

/// Create `<output>/train` and `<output>/val`, intermediate directories
/// included. Fails without creating anything if the output path exists.
pub fn create_output_tree(output_dir: &Path) -> Result<OutputTree> {
    check_output_free(output_dir)?;

    let tree = OutputTree {
        train: output_dir.join("train"),
        val: output_dir.join("val"),
    };
    fs::create_dir_all(&tree.train)?;
    fs::create_dir_all(&tree.val)?;
    Ok(tree)
}

/// Copy `files` into `dest`, keeping only each file's basename.
///
/// Advances `progress` once per copied file. The first failure aborts;
/// files already copied are left in place.
pub fn copy_into(files: &[PathBuf], dest: &Path, progress: &ProgressBar) -> Result<()> {
    for file in files {
        if let Some(name) = file.file_name() {
            fs::copy(file, dest.join(name))?;
        }
        progress.inc(1);
    }
    Ok(())
}

/// Progress bar for an n-file copy phase, hidden when `quiet`.
#[must_use]
pub fn copy_progress(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{wide_bar:.green}] {pos}/{len} ({per_sec}, {eta})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}
