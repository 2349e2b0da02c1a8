use std::collections::BTreeSet;

use ndarray::{ArrayBase, Data, Ix1};

use crate::error::IrisError;

/// Precision, recall and F1 of a single class, computed one-vs-rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetrics {
    pub label: usize,
    pub name: String,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    /// Number of true instances of this class
    pub support: usize,
}

/// Metrics averaged over classes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AveragedMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// Per-class precision/recall/F1 table with overall accuracy.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    /// Unweighted mean over classes
    pub macro_avg: AveragedMetrics,
    /// Mean over classes weighted by support
    pub weighted_avg: AveragedMetrics,
    pub total_support: usize,
}

/// Build a classification report from true and predicted labels.
///
/// Classes are the sorted union of labels seen in either array. A class that
/// is never predicted gets a precision of 0, and likewise a class that never
/// occurs gets a recall of 0.
///
/// # Arguments
///
/// * `y_true` - Ground-truth labels.
/// * `y_pred` - Predicted labels, same length as `y_true`.
/// * `target_names` - Optional display names indexed by label. Labels without a name are shown as numbers.
pub fn classification_report<S, T>(
    y_true: &ArrayBase<S, Ix1>,
    y_pred: &ArrayBase<T, Ix1>,
    target_names: Option<&[&str]>,
) -> Result<ClassificationReport, IrisError>
where
    S: Data<Elem = usize>,
    T: Data<Elem = usize>,
{
    if y_true.len() != y_pred.len() {
        return Err(IrisError::ShapeMismatch {
            rows: y_pred.len(),
            labels: y_true.len(),
        });
    }
    if y_true.is_empty() {
        return Err(IrisError::EmptyInput);
    }

    let labels: BTreeSet<usize> = y_true.iter().chain(y_pred.iter()).copied().collect();
    let total = y_true.len();

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    let accuracy = correct as f64 / total as f64;

    let mut classes = Vec::with_capacity(labels.len());
    for label in labels {
        let mut tp = 0usize;
        let mut fp = 0usize;
        let mut fn_ = 0usize;
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            match (t == label, p == label) {
                (true, true) => tp += 1,
                (false, true) => fp += 1,
                (true, false) => fn_ += 1,
                (false, false) => {}
            }
        }

        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        let name = target_names
            .and_then(|names| names.get(label))
            .map(|name| name.to_string())
            .unwrap_or_else(|| label.to_string());

        log::trace!(
            "Class {}: tp={} fp={} fn={} precision={:.3} recall={:.3}",
            name,
            tp,
            fp,
            fn_,
            precision,
            recall
        );

        classes.push(ClassMetrics {
            label,
            name,
            precision,
            recall,
            f1_score,
            support: tp + fn_,
        });
    }

    let n_classes = classes.len() as f64;
    let macro_avg = AveragedMetrics {
        precision: classes.iter().map(|c| c.precision).sum::<f64>() / n_classes,
        recall: classes.iter().map(|c| c.recall).sum::<f64>() / n_classes,
        f1_score: classes.iter().map(|c| c.f1_score).sum::<f64>() / n_classes,
    };

    let weighted = |metric: fn(&ClassMetrics) -> f64| -> f64 {
        classes
            .iter()
            .map(|c| metric(c) * c.support as f64)
            .sum::<f64>()
            / total as f64
    };
    let weighted_avg = AveragedMetrics {
        precision: weighted(|c| c.precision),
        recall: weighted(|c| c.recall),
        f1_score: weighted(|c| c.f1_score),
    };

    Ok(ClassificationReport {
        classes,
        accuracy,
        macro_avg,
        weighted_avg,
        total_support: total,
    })
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
