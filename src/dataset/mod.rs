//! Dataset discovery and class grouping
//!
//! A dataset root is expected to contain flat `train/` and `val/`
//! directories of `<label>_<id>.JPEG` files. Discovery is single-level;
//! grouping buckets training files by the class label parsed from each
//! filename.

mod error;

#[cfg(test)]
mod tests;

pub use error::{DatasetError, Result};

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Enumerate the files of one split directory.
///
/// Single-level listing, keeping regular files whose extension matches
/// `extension` exactly (case-sensitive). A missing directory yields an
/// empty list; other I/O failures propagate.
pub fn discover_split(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(DatasetError::Io(e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }

    // read_dir order is platform-dependent; sort so a fixed seed
    // reproduces a run on any filesystem.
    files.sort();
    Ok(files)
}

/// Extract the class label from a dataset filename.
///
/// The label is the portion of the file stem before the last underscore:
/// `n01440764_10026.JPEG` parses to `n01440764`, and a label may itself
/// contain underscores (`great_white_shark_42.JPEG` parses to
/// `great_white_shark`). A stem without an underscore, or with an empty
/// label or id half, is malformed.
pub fn parse_label(path: &Path) -> Result<&str> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    match stem.rsplit_once('_') {
        Some((label, id)) if !label.is_empty() && !id.is_empty() => Ok(label),
        _ => Err(DatasetError::MalformedFilename {
            path: path.to_path_buf(),
        }),
    }
}

/// Bucket training files by class label, creating buckets on first sight.
///
/// Buckets are keyed in sorted label order. The first malformed filename
/// aborts the grouping.
pub fn group_by_class(files: &[PathBuf]) -> Result<BTreeMap<String, Vec<PathBuf>>> {
    let mut per_class: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for file in files {
        let label = parse_label(file)?;
        per_class
            .entry(label.to_string())
            .or_default()
            .push(file.clone());
    }
    Ok(per_class)
}
