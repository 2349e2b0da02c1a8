//! Loading the Iris dataset and splitting it into train/test partitions.
//!
//! The split is stratified by class and fully determined by the test fraction
//! and the seed, so repeated calls with the same arguments return identical
//! partitions.
use std::collections::BTreeMap;

use linfa::Dataset;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::SplitConfig;
use crate::error::IrisError;

pub const IRIS_N_SAMPLES: usize = 150;
pub const IRIS_N_FEATURES: usize = 4;
pub const IRIS_N_CLASSES: usize = 3;

pub const IRIS_FEATURE_NAMES: [&str; IRIS_N_FEATURES] =
    ["sepal length", "sepal width", "petal length", "petal width"];
pub const IRIS_CLASS_NAMES: [&str; IRIS_N_CLASSES] = ["setosa", "versicolor", "virginica"];

/// Train/test partition of a labelled feature matrix.
#[derive(Debug, Clone)]
pub struct IrisSplit {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<usize>,
    pub y_test: Array1<usize>,
}

impl IrisSplit {
    pub fn n_train(&self) -> usize {
        self.x_train.nrows()
    }

    pub fn n_test(&self) -> usize {
        self.x_test.nrows()
    }

    /// Consume the split, returning `(x_train, x_test, y_train, y_test)`.
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>, Array1<usize>, Array1<usize>) {
        (self.x_train, self.x_test, self.y_train, self.y_test)
    }

    pub fn log_summary(&self) {
        log::info!(
            "Split: {} training rows, {} test rows, {} features",
            self.n_train(),
            self.n_test(),
            self.x_train.ncols()
        );
    }
}

/// Load the full Iris dataset, checking that every feature value is finite.
pub fn iris_dataset() -> Result<Dataset<f64, usize, Ix1>, IrisError> {
    let dataset = linfa_datasets::iris();
    ensure_finite(&dataset.records)?;
    Ok(dataset)
}

/// Load the Iris dataset and split it into train and test partitions.
///
/// # Arguments
///
/// * `test_fraction` - Fraction of rows held out for testing, in (0, 1).
/// * `seed` - Seed of the RNG driving the shuffle. Same seed and fraction give the same split.
pub fn load_iris_data(test_fraction: f64, seed: u64) -> Result<IrisSplit, IrisError> {
    validate_test_fraction(test_fraction)?;
    let dataset = iris_dataset()?;
    let split = train_test_split(&dataset.records, &dataset.targets, test_fraction, seed)?;
    split.log_summary();
    Ok(split)
}

pub fn load_iris_data_with(config: &SplitConfig) -> Result<IrisSplit, IrisError> {
    load_iris_data(config.test_fraction, config.seed)
}

/// Stratified, seeded train/test split of arbitrary labelled data.
///
/// Each class sends `ceil(test_fraction * class_size)` rows to the test
/// partition, clamped so that a class with at least two rows is present in
/// both partitions. Rows within each partition are shuffled.
pub fn train_test_split<S, T>(
    records: &ArrayBase<S, Ix2>,
    targets: &ArrayBase<T, Ix1>,
    test_fraction: f64,
    seed: u64,
) -> Result<IrisSplit, IrisError>
where
    S: Data<Elem = f64>,
    T: Data<Elem = usize>,
{
    validate_test_fraction(test_fraction)?;
    if records.nrows() != targets.len() {
        return Err(IrisError::ShapeMismatch {
            rows: records.nrows(),
            labels: targets.len(),
        });
    }
    if records.nrows() == 0 {
        return Err(IrisError::EmptyInput);
    }

    let mut by_class: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (row, &label) in targets.iter().enumerate() {
        by_class.entry(label).or_default().push(row);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_idx = Vec::with_capacity(records.nrows());
    let mut test_idx = Vec::new();

    for (label, mut rows) in by_class {
        rows.shuffle(&mut rng);
        let n_test = class_test_size(rows.len(), test_fraction);
        log::trace!(
            "Class {}: {} rows, {} held out for testing",
            label,
            rows.len(),
            n_test
        );
        test_idx.extend_from_slice(&rows[..n_test]);
        train_idx.extend_from_slice(&rows[n_test..]);
    }

    train_idx.shuffle(&mut rng);
    test_idx.shuffle(&mut rng);

    log::debug!(
        "Split {} rows into {} train / {} test (fraction {}, seed {})",
        records.nrows(),
        train_idx.len(),
        test_idx.len(),
        test_fraction,
        seed
    );

    Ok(IrisSplit {
        x_train: records.select(Axis(0), &train_idx),
        x_test: records.select(Axis(0), &test_idx),
        y_train: targets.select(Axis(0), &train_idx),
        y_test: targets.select(Axis(0), &test_idx),
    })
}

fn class_test_size(class_size: usize, test_fraction: f64) -> usize {
    if class_size < 2 {
        return 0;
    }
    let n_test = (test_fraction * class_size as f64).ceil() as usize;
    n_test.clamp(1, class_size - 1)
}

fn validate_test_fraction(test_fraction: f64) -> Result<(), IrisError> {
    // NaN fails both comparisons
    if test_fraction > 0.0 && test_fraction < 1.0 {
        Ok(())
    } else {
        Err(IrisError::InvalidTestFraction(test_fraction))
    }
}

/// Count non-finite entries and fail if any are present.
pub(crate) fn ensure_finite<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>) -> Result<(), IrisError> {
    let count = x.iter().filter(|v| !v.is_finite()).count();
    if count > 0 {
        return Err(IrisError::NonFiniteValues(count));
    }
    Ok(())
}
