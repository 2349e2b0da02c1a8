//! iris-classifier: train, evaluate and persist a classifier on the Iris dataset.
//!
//! This crate provides a deterministic train/test split loader for the Iris
//! data, an `IrisClassifier` wrapper around a `linfa-trees` decision tree with
//! a train/predict/evaluate/save/load lifecycle, and small reporting helpers
//! that turn predictions into per-class precision/recall/F1 tables.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod models;
pub mod report;
pub mod stats;

pub use config::{ModelConfig, SplitConfig, SplitCriterion};
pub use data_handling::{load_iris_data, load_iris_data_with, IrisSplit};
pub use error::IrisError;
pub use models::iris_classifier::IrisClassifier;
