//! Integration tests for the classification report, HTML rendering and config types.

use ndarray::array;

use iris_classifier::config::{ModelConfig, SplitConfig, SplitCriterion};
use iris_classifier::report::html::render_html;
use iris_classifier::stats::classification_report;

// ---------------------------------------------------------------------------
// Classification report
// ---------------------------------------------------------------------------

#[test]
fn weighted_average_uses_support() {
    // class 0 has 3 rows all right, class 1 has 1 row predicted as 0
    let y_true = array![0usize, 0, 0, 1];
    let y_pred = array![0usize, 0, 0, 0];
    let report = classification_report(&y_true, &y_pred, None).unwrap();

    assert_eq!(report.accuracy, 0.75);
    // recall: class 0 = 1.0, class 1 = 0.0
    assert!((report.macro_avg.recall - 0.5).abs() < 1e-12);
    assert!((report.weighted_avg.recall - 0.75).abs() < 1e-12);
}

#[test]
fn report_text_mentions_precision() {
    let y = array![2usize, 1, 0];
    let text = classification_report(&y, &y, Some(&["setosa", "versicolor", "virginica"][..]))
        .unwrap()
        .to_string();
    assert!(text.to_lowercase().contains("precision"));
    assert!(text.contains("1.00"));
}

#[test]
fn empty_labels_are_rejected() {
    let empty = ndarray::Array1::<usize>::zeros(0);
    assert!(classification_report(&empty, &empty, None).is_err());
}

#[test]
fn html_report_lists_every_class() {
    let y_true = array![0usize, 1, 2];
    let y_pred = array![0usize, 2, 2];
    let report = classification_report(&y_true, &y_pred, None).unwrap();
    let page = render_html(&report, "Evaluation");
    for label in ["<td>0</td>", "<td>1</td>", "<td>2</td>"] {
        assert!(page.contains(label), "missing {}", label);
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn model_config_defaults() {
    let cfg = ModelConfig::default();
    assert_eq!(cfg.split_criterion, SplitCriterion::Gini);
    assert_eq!(cfg.max_depth, None);
    assert!(cfg.min_weight_split > 0.0);
    assert!(cfg.min_weight_leaf > 0.0);
}

#[test]
fn split_criterion_from_str() {
    assert_eq!("gini".parse::<SplitCriterion>().unwrap(), SplitCriterion::Gini);
    assert_eq!("Entropy".parse::<SplitCriterion>().unwrap(), SplitCriterion::Entropy);
    assert!("random_forest".parse::<SplitCriterion>().is_err());
}

#[test]
fn model_config_new_keeps_other_defaults() {
    let cfg = ModelConfig::new(SplitCriterion::Entropy, Some(4));
    assert_eq!(cfg.max_depth, Some(4));
    assert_eq!(cfg.min_weight_split, ModelConfig::default().min_weight_split);
}

#[test]
fn model_config_json_round_trip() {
    let cfg = ModelConfig::new(SplitCriterion::Entropy, Some(5));
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("split_criterion"));
    assert!(json.contains("entropy"));
    let back: ModelConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn split_config_defaults_and_json() {
    let cfg = SplitConfig::default();
    assert_eq!(cfg.seed, 42);
    assert!((cfg.test_fraction - 0.2).abs() < 1e-12);

    let back: SplitConfig = serde_json::from_str(r#"{"test_fraction":0.3,"seed":7}"#).unwrap();
    assert_eq!(back, SplitConfig::new(0.3, 7));
}
