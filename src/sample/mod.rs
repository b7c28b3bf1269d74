//! Random subset selection
//!
//! All selection is shuffle-then-truncate over an explicit RNG: results
//! are without replacement, never exceed the available pool, and are
//! reproducible under a fixed seed.


use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// How many elements to keep out of an available pool
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Quota {
    /// Keep everything
    #[default]
    All,
    /// Keep an absolute number of elements
    Count(usize),
    /// Keep a fraction of the pool, floored to a whole count
    Fraction(f64),
}

impl Quota {
    /// Combine an absolute-count flag with a percentage flag.
    ///
    /// An explicit count wins; neither flag means keep everything.
    #[must_use]
    pub fn from_flags(count: Option<usize>, fraction: Option<f64>) -> Self {
        match (count, fraction) {
            (Some(n), _) => Quota::Count(n),
            (None, Some(f)) => Quota::Fraction(f),
            (None, None) => Quota::All,
        }
    }

    /// Resolve the quota against an available pool size.
    ///
    /// The result never exceeds `available`. Fractions floor to a whole
    /// count; fractions at or below zero resolve to zero.
    #[must_use]
    pub fn resolve(&self, available: usize) -> usize {
        match *self {
            Quota::All => available,
            Quota::Count(n) => n.min(available),
            Quota::Fraction(f) => {
                let n = (f * available as f64).floor();
                if n <= 0.0 {
                    0
                } else {
                    (n as usize).min(available)
                }
            }
        }
    }
}

/// Sampling configuration for one subsetting run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleOptions {
    /// Quota on the number of classes kept
    pub classes: Quota,
    /// Quota on items kept per selected class, resolved against each
    /// class's own size
    pub train_items: Quota,
    /// Quota on validation items kept
    pub val_items: Quota,
    /// Random seed (None = OS entropy)
    pub seed: Option<u64>,
}

impl SampleOptions {
    /// Create options that keep everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class quota
    #[must_use]
    pub fn classes(mut self, quota: Quota) -> Self {
        self.classes = quota;
        self
    }

    /// Set the per-class item quota
    #[must_use]
    pub fn train_items(mut self, quota: Quota) -> Self {
        self.train_items = quota;
        self
    }

    /// Set the validation item quota
    #[must_use]
    pub fn val_items(mut self, quota: Quota) -> Self {
        self.val_items = quota;
        self
    }

    /// Set the random seed
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this run draws from
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Files chosen for the output dataset
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// Selected training files, bucketed by class label
    pub train: BTreeMap<String, Vec<PathBuf>>,
    /// Selected validation files
    pub val: Vec<PathBuf>,
}

impl Selection {
    /// Total number of selected training files across all classes
    #[must_use]
    pub fn train_len(&self) -> usize {
        self.train.values().map(Vec::len).sum()
    }

    /// Flatten the per-class buckets into one file list
    #[must_use]
    pub fn train_files(&self) -> Vec<PathBuf> {
        self.train.values().flatten().cloned().collect()
    }
}

/// Pick which class labels survive the subsetting
pub fn select_classes<R: Rng>(
    per_class: &BTreeMap<String, Vec<PathBuf>>,
    quota: Quota,
    rng: &mut R,
) -> Vec<String> {
    let mut labels: Vec<String> = per_class.keys().cloned().collect();
    labels.shuffle(rng);
    labels.truncate(quota.resolve(labels.len()));
    labels
}

/// Pick the surviving items of one pool of files
pub fn select_items<R: Rng>(pool: &[PathBuf], quota: Quota, rng: &mut R) -> Vec<PathBuf> {
    let mut items = pool.to_vec();
    items.shuffle(rng);
    items.truncate(quota.resolve(items.len()));
    items
}

/// Select the full output set: classes, items per selected class, and
/// validation items. One independent draw per class.
pub fn select<R: Rng>(
    per_class: &BTreeMap<String, Vec<PathBuf>>,
    val_files: &[PathBuf],
    options: &SampleOptions,
    rng: &mut R,
) -> Selection {
    let mut train = BTreeMap::new();
    for label in select_classes(per_class, options.classes, rng) {
        let kept = select_items(&per_class[&label], options.train_items, rng);
        train.insert(label, kept);
    }

    let val = select_items(val_files, options.val_items, rng);

    Selection { train, val }
}
