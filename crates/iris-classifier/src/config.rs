use linfa_trees::SplitQuality;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Hyper-parameters of the decision tree wrapped by `IrisClassifier`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub split_criterion: SplitCriterion,
    /// `None` grows the tree until leaves are pure.
    pub max_depth: Option<usize>,
    pub min_weight_split: f32,
    pub min_weight_leaf: f32,
    pub min_impurity_decrease: f64,
}

/// Impurity measure used to pick splits.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SplitCriterion {
    #[default]
    Gini,
    Entropy,
}

impl SplitCriterion {
    pub(crate) fn to_split_quality(self) -> SplitQuality {
        match self {
            SplitCriterion::Gini => SplitQuality::Gini,
            SplitCriterion::Entropy => SplitQuality::Entropy,
        }
    }
}

impl FromStr for SplitCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gini" => Ok(SplitCriterion::Gini),
            "entropy" => Ok(SplitCriterion::Entropy),
            _ => Err(format!(
                "Unknown split criterion: {}. Valid options are: gini, entropy",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(split_criterion: SplitCriterion, max_depth: Option<usize>) -> Self {
        Self {
            split_criterion,
            max_depth,
            ..Self::default()
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            split_criterion: SplitCriterion::Gini,
            max_depth: None,
            min_weight_split: 2.0,
            min_weight_leaf: 1.0,
            min_impurity_decrease: 0.00001,
        }
    }
}

/// Parameters of the train/test split performed by the data loader.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    /// Fraction of rows held out for testing, strictly between 0 and 1.
    pub test_fraction: f64,
    pub seed: u64,
}

impl SplitConfig {
    pub fn new(test_fraction: f64, seed: u64) -> Self {
        Self {
            test_fraction,
            seed,
        }
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
        }
    }
}
