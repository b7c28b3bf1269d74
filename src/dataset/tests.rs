//! Dataset discovery and grouping tests

use super::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"x").expect("operation should succeed");
}

#[test]
fn test_parse_label_basic() {
    let label = parse_label(Path::new("n01440764_10026.JPEG")).unwrap();
    assert_eq!(label, "n01440764");
}

#[test]
fn test_parse_label_with_directory_components() {
    let label = parse_label(Path::new("data/train/n01440764_10026.JPEG")).unwrap();
    assert_eq!(label, "n01440764");
}

#[test]
fn test_parse_label_underscore_in_label() {
    // Split on the LAST underscore, so multi-token labels parse.
    let label = parse_label(Path::new("great_white_shark_42.JPEG")).unwrap();
    assert_eq!(label, "great_white_shark");
}

#[test]
fn test_parse_label_no_underscore() {
    let err = parse_label(Path::new("noseparator.JPEG")).unwrap_err();
    assert!(matches!(err, DatasetError::MalformedFilename { .. }));
}

#[test]
fn test_parse_label_empty_halves() {
    assert!(parse_label(Path::new("_10026.JPEG")).is_err());
    assert!(parse_label(Path::new("label_.JPEG")).is_err());
    assert!(parse_label(Path::new("_.JPEG")).is_err());
}

#[test]
fn test_group_by_class_buckets() {
    let files: Vec<_> = [
        "cat_1.JPEG",
        "dog_1.JPEG",
        "cat_2.JPEG",
        "cat_3.JPEG",
        "dog_2.JPEG",
    ]
    .iter()
    .map(|f| Path::new("train").join(f))
    .collect();

    let per_class = group_by_class(&files).unwrap();
    assert_eq!(per_class.len(), 2);
    assert_eq!(per_class["cat"].len(), 3);
    assert_eq!(per_class["dog"].len(), 2);
    assert!(per_class["cat"].contains(&Path::new("train").join("cat_2.JPEG")));
}

#[test]
fn test_group_by_class_malformed_aborts() {
    let files = vec![
        Path::new("cat_1.JPEG").to_path_buf(),
        Path::new("broken.JPEG").to_path_buf(),
    ];
    let err = group_by_class(&files).unwrap_err();
    assert!(matches!(err, DatasetError::MalformedFilename { .. }));
}

#[test]
fn test_group_by_class_idempotent() {
    let files: Vec<_> = ["a_1.JPEG", "b_1.JPEG", "a_2.JPEG"]
        .iter()
        .map(|f| Path::new(".").join(f))
        .collect();
    let first = group_by_class(&files).unwrap();
    let second = group_by_class(&files).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_discover_split_filters_extension() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "cat_1.JPEG");
    touch(dir.path(), "cat_2.JPEG");
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "cat_3.jpeg"); // wrong case, glob-style match is exact
    fs::create_dir(dir.path().join("nested")).unwrap();
    touch(&dir.path().join("nested"), "cat_4.JPEG"); // single-level only

    let files = discover_split(dir.path(), "JPEG").unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["cat_1.JPEG", "cat_2.JPEG"]);
}

#[test]
fn test_discover_split_sorted_output() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "b_1.JPEG");
    touch(dir.path(), "a_1.JPEG");
    touch(dir.path(), "c_1.JPEG");

    let files = discover_split(dir.path(), "JPEG").unwrap();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn test_discover_split_missing_dir_is_empty() {
    let dir = TempDir::new().unwrap();
    let files = discover_split(&dir.path().join("does-not-exist"), "JPEG").unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_discover_split_alternate_extension() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "cat_1.png");
    touch(dir.path(), "cat_2.JPEG");

    let files = discover_split(dir.path(), "png").unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("cat_1.png"));
}
