pub mod iris_classifier;
pub mod persistence;
