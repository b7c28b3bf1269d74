//! Muestrear: dataset subsetting tool
//!
//! Subsets a flat-layout image classification dataset (a root directory
//! with `train/` and `val/` collections of `<label>_<id>.JPEG` files)
//! into a smaller dataset by randomly sampling a subset of classes, a
//! subset of items per class, and a subset of validation items, then
//! copying the selected files into a fresh output tree.
//!
//! # Modules
//!
//! - [`config`] - CLI argument parsing
//! - [`dataset`] - file discovery and class grouping
//! - [`sample`] - quota resolution and shuffle-then-truncate selection
//! - [`materialize`] - output tree creation and file copying
//! - [`report`] - run summaries in text or JSON form
//! - [`cli`] - command execution and console output

pub mod cli;
pub mod config;
pub mod dataset;
pub mod materialize;
pub mod report;
pub mod sample;
