//! Integration tests for the Iris loader and the deterministic split.

use std::collections::HashSet;

use iris_classifier::data_handling::{
    iris_dataset, load_iris_data, load_iris_data_with, IRIS_N_CLASSES, IRIS_N_FEATURES,
    IRIS_N_SAMPLES,
};
use iris_classifier::{IrisError, SplitConfig};

// ---------------------------------------------------------------------------
// Dataset shape
// ---------------------------------------------------------------------------

#[test]
fn full_dataset_shape() {
    let dataset = iris_dataset().unwrap();
    assert_eq!(dataset.records.nrows(), IRIS_N_SAMPLES);
    assert_eq!(dataset.records.ncols(), IRIS_N_FEATURES);
    let classes: HashSet<usize> = dataset.targets.iter().copied().collect();
    assert_eq!(classes.len(), IRIS_N_CLASSES);
}

#[test]
fn default_split_shape() {
    let split = load_iris_data_with(&SplitConfig::default()).unwrap();

    assert_eq!(split.x_train.ncols(), 4);
    assert_eq!(split.x_test.ncols(), 4);
    assert_eq!(split.n_train() + split.n_test(), 150);
    assert_eq!(split.y_train.len(), split.n_train());
    assert_eq!(split.y_test.len(), split.n_test());

    let classes: HashSet<usize> = split.y_train.iter().copied().collect();
    assert_eq!(classes.len(), 3);
}

#[test]
fn split_sizes_follow_fraction() {
    let split = load_iris_data(0.3, 42).unwrap();
    assert_eq!(split.n_test(), 45);
    assert_eq!(split.n_train(), 105);
}

#[test]
fn shape_holds_for_many_seeds_and_fractions() {
    for &fraction in &[0.05, 0.2, 0.3, 0.5, 0.9] {
        for seed in [0u64, 1, 7, 42, u64::MAX] {
            let split = load_iris_data(fraction, seed).unwrap();
            assert_eq!(split.n_train() + split.n_test(), 150);
            assert_eq!(split.x_train.ncols(), 4);
            let train_classes: HashSet<usize> = split.y_train.iter().copied().collect();
            let test_classes: HashSet<usize> = split.y_test.iter().copied().collect();
            assert_eq!(train_classes.len(), 3, "fraction {} seed {}", fraction, seed);
            assert_eq!(test_classes.len(), 3, "fraction {} seed {}", fraction, seed);
        }
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn same_seed_gives_identical_split() {
    let a = load_iris_data(0.3, 42).unwrap();
    let b = load_iris_data(0.3, 42).unwrap();
    assert_eq!(a.x_train, b.x_train);
    assert_eq!(a.x_test, b.x_test);
    assert_eq!(a.y_train, b.y_train);
    assert_eq!(a.y_test, b.y_test);
}

#[test]
fn different_seeds_give_different_splits() {
    let a = load_iris_data(0.3, 1).unwrap();
    let b = load_iris_data(0.3, 2).unwrap();
    assert_ne!(a.x_test, b.x_test);
}

#[test]
fn partitions_are_disjoint_and_cover_dataset() {
    let dataset = iris_dataset().unwrap();
    let split = load_iris_data(0.3, 42).unwrap();

    // Iris contains duplicate rows, so compare row multisets rather than sets
    let key = |row: ndarray::ArrayView1<f64>| -> Vec<u64> { row.iter().map(|v| v.to_bits()).collect() };
    let mut all: Vec<Vec<u64>> = dataset.records.outer_iter().map(key).collect();
    let mut parts: Vec<Vec<u64>> = split
        .x_train
        .outer_iter()
        .chain(split.x_test.outer_iter())
        .map(key)
        .collect();
    all.sort();
    parts.sort();
    assert_eq!(all, parts);
}

// ---------------------------------------------------------------------------
// Data quality
// ---------------------------------------------------------------------------

#[test]
fn partitions_contain_only_finite_values() {
    let (x_train, x_test, y_train, y_test) = load_iris_data(0.2, 42).unwrap().into_parts();
    assert!(x_train.iter().all(|v| v.is_finite()));
    assert!(x_test.iter().all(|v| v.is_finite()));
    assert!(y_train.iter().all(|&l| l < IRIS_N_CLASSES));
    assert!(y_test.iter().all(|&l| l < IRIS_N_CLASSES));
}

// ---------------------------------------------------------------------------
// Parameter validation
// ---------------------------------------------------------------------------

#[test]
fn invalid_fractions_are_rejected() {
    for bad in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
        match load_iris_data(bad, 42) {
            Err(IrisError::InvalidTestFraction(_)) => {}
            other => panic!("fraction {} should be rejected, got {:?}", bad, other.map(|s| s.n_test())),
        }
    }
}
