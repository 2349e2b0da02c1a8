use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use csv::Writer;
use ndarray::Array1;

use iris_classifier::data_handling::{load_iris_data_with, IRIS_CLASS_NAMES, IRIS_FEATURE_NAMES};
use iris_classifier::report::html::render_html;
use iris_classifier::{IrisClassifier, SplitConfig};

fn save_predictions_to_csv(
    y_true: &Array1<usize>,
    predictions: &Array1<usize>,
    output_file: &Path,
) -> Result<()> {
    let mut writer = Writer::from_path(output_file)?;
    writer.write_record(["row", "label", "prediction", "correct"])?;
    for (row, (truth, pred)) in y_true.iter().zip(predictions.iter()).enumerate() {
        writer.write_record([
            row.to_string(),
            IRIS_CLASS_NAMES[*truth].to_string(),
            IRIS_CLASS_NAMES[*pred].to_string(),
            (truth == pred).to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("IRIS_LOG", "info"))
        .init();

    let output_dir = Path::new("iris_output");
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let split = load_iris_data_with(&SplitConfig::default()).context("loading iris data")?;

    let mut classifier = IrisClassifier::new();
    classifier
        .train(&split.x_train, &split.y_train)
        .context("training classifier")?;

    let report = classifier
        .evaluate_report(&split.x_test, &split.y_test)
        .context("evaluating classifier")?;
    println!("Accuracy: {:.4}\n", report.accuracy);
    println!("{}", report);

    for (name, importance) in IRIS_FEATURE_NAMES
        .iter()
        .zip(classifier.feature_importance()?)
    {
        log::info!("Feature importance {:>14}: {:.4}", name, importance);
    }

    let predictions = classifier.predict(&split.x_test)?;
    save_predictions_to_csv(&split.y_test, &predictions, &output_dir.join("predictions.csv"))?;

    let mut html_file = File::create(output_dir.join("report.html"))?;
    html_file.write_all(render_html(&report, "Iris decision tree").as_bytes())?;

    let model_path = output_dir.join("iris_model.bin");
    classifier.save(&model_path).context("saving model")?;

    let restored = IrisClassifier::from_file(&model_path).context("loading model")?;
    ensure!(
        restored.predict(&split.x_test)? == predictions,
        "reloaded model disagrees with the original"
    );
    log::info!("Reloaded model reproduces all {} test predictions", predictions.len());

    Ok(())
}
