use std::path::Path;

use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_trees::DecisionTree;
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

use crate::config::ModelConfig;
use crate::data_handling::{ensure_finite, IRIS_CLASS_NAMES};
use crate::error::IrisError;
use crate::models::persistence::ModelSnapshot;
use crate::stats::{classification_report, ClassificationReport};

/// Decision-tree classifier for the Iris dataset with an explicit
/// untrained/trained lifecycle.
///
/// A fresh instance is untrained. `train` (or `load`) makes it trained, after
/// which `predict` and `evaluate` may be called. Training again replaces the
/// fitted tree.
#[derive(Debug)]
pub struct IrisClassifier {
    config: ModelConfig,
    model: Option<DecisionTree<f64, usize>>,
    num_features: usize,
}

impl IrisClassifier {
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    pub fn with_config(config: ModelConfig) -> Self {
        IrisClassifier {
            config,
            model: None,
            num_features: 0,
        }
    }

    /// Build a trained classifier from a snapshot written by [`IrisClassifier::save`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IrisError> {
        let mut classifier = Self::new();
        classifier.load(path)?;
        Ok(classifier)
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Feature width seen at training time, 0 while untrained.
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Fit the decision tree on `x` (rows are samples) and labels `y`.
    ///
    /// On error the classifier keeps whatever state it had before the call.
    pub fn train<S, T>(&mut self, x: &ArrayBase<S, Ix2>, y: &ArrayBase<T, Ix1>) -> Result<(), IrisError>
    where
        S: Data<Elem = f64>,
        T: Data<Elem = usize>,
    {
        if x.nrows() != y.len() {
            return Err(IrisError::ShapeMismatch {
                rows: x.nrows(),
                labels: y.len(),
            });
        }
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(IrisError::EmptyInput);
        }
        ensure_finite(x)?;

        let dataset = Dataset::new(x.to_owned(), y.to_owned());
        let model = DecisionTree::<f64, usize>::params()
            .split_quality(self.config.split_criterion.to_split_quality())
            .max_depth(self.config.max_depth)
            .min_weight_split(self.config.min_weight_split)
            .min_weight_leaf(self.config.min_weight_leaf)
            .min_impurity_decrease(self.config.min_impurity_decrease)
            .fit(&dataset)
            .map_err(|e| IrisError::Fit(e.to_string()))?;

        log::info!(
            "Fitted decision tree ({:?}) on {} samples with {} features",
            self.config.split_criterion,
            x.nrows(),
            x.ncols()
        );

        self.model = Some(model);
        self.num_features = x.ncols();
        Ok(())
    }

    /// Predict one class label per row of `x`.
    pub fn predict<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array1<usize>, IrisError>
    where
        S: Data<Elem = f64>,
    {
        let model = self.model.as_ref().ok_or(IrisError::NotTrained("predict"))?;
        if x.ncols() != self.num_features {
            return Err(IrisError::FeatureMismatch {
                expected: self.num_features,
                found: x.ncols(),
            });
        }
        ensure_finite(x)?;

        let predictions: Array1<usize> = model.predict(x);
        Ok(predictions)
    }

    /// Compute accuracy and a textual per-class precision/recall/F1 report.
    pub fn evaluate<S, T>(&self, x: &ArrayBase<S, Ix2>, y: &ArrayBase<T, Ix1>) -> Result<(f64, String), IrisError>
    where
        S: Data<Elem = f64>,
        T: Data<Elem = usize>,
    {
        let report = self.evaluate_report(x, y)?;
        Ok((report.accuracy, report.to_string()))
    }

    /// Same as [`IrisClassifier::evaluate`] but returns the structured report.
    pub fn evaluate_report<S, T>(
        &self,
        x: &ArrayBase<S, Ix2>,
        y: &ArrayBase<T, Ix1>,
    ) -> Result<ClassificationReport, IrisError>
    where
        S: Data<Elem = f64>,
        T: Data<Elem = usize>,
    {
        if !self.is_trained() {
            return Err(IrisError::NotTrained("evaluate"));
        }
        if x.nrows() != y.len() {
            return Err(IrisError::ShapeMismatch {
                rows: x.nrows(),
                labels: y.len(),
            });
        }

        let predictions = self.predict(x)?;
        let report = classification_report(y, &predictions, Some(&IRIS_CLASS_NAMES[..]))?;
        log::info!(
            "Evaluated on {} samples: accuracy {:.4}",
            report.total_support,
            report.accuracy
        );
        Ok(report)
    }

    /// Impurity-based importance of each feature in the fitted tree.
    pub fn feature_importance(&self) -> Result<Vec<f64>, IrisError> {
        let model = self
            .model
            .as_ref()
            .ok_or(IrisError::NotTrained("feature_importance"))?;
        Ok(model.feature_importance())
    }

    /// Write the fitted tree, its config and the trained flag to `path`,
    /// creating or overwriting the file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), IrisError> {
        let model = self.model.as_ref().ok_or(IrisError::NotTrained("save"))?;
        let path = path.as_ref();

        ModelSnapshot::new(self.config.clone(), self.num_features, model).write_to(path)?;
        log::info!("Model saved to: {}", path.display());
        Ok(())
    }

    /// Restore a snapshot written by [`IrisClassifier::save`], replacing the
    /// current config and fitted tree. The classifier is trained afterwards.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), IrisError> {
        let path = path.as_ref();
        let snapshot: ModelSnapshot<DecisionTree<f64, usize>> = ModelSnapshot::read_from(path)?;

        log::info!(
            "Loaded model from {} (saved at {})",
            path.display(),
            snapshot.saved_at
        );

        self.config = snapshot.config;
        self.num_features = snapshot.num_features;
        self.model = Some(snapshot.model);
        Ok(())
    }
}

impl Default for IrisClassifier {
    fn default() -> Self {
        Self::new()
    }
}
