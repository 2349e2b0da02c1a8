//! Rendering of evaluation results.
//!
//! `ClassificationReport` prints as a fixed-width text table through
//! `Display`; the `html` module renders the same table as a standalone page.
pub mod html;

use std::fmt;

use crate::stats::{AveragedMetrics, ClassificationReport};

const LABEL_WIDTH: usize = 12;
const DIGITS: usize = 2;

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            .max(LABEL_WIDTH);

        writeln!(
            f,
            "{:>width$} {:>9} {:>9} {:>9} {:>9}",
            "",
            "precision",
            "recall",
            "f1-score",
            "support",
            width = width
        )?;
        writeln!(f)?;

        for class in &self.classes {
            writeln!(
                f,
                "{:>width$} {:>9.prec$} {:>9.prec$} {:>9.prec$} {:>9}",
                class.name,
                class.precision,
                class.recall,
                class.f1_score,
                class.support,
                width = width,
                prec = DIGITS
            )?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{:>width$} {:>9} {:>9} {:>9.prec$} {:>9}",
            "accuracy",
            "",
            "",
            self.accuracy,
            self.total_support,
            width = width,
            prec = DIGITS
        )?;
        write_average(f, "macro avg", &self.macro_avg, self.total_support, width)?;
        write_average(f, "weighted avg", &self.weighted_avg, self.total_support, width)
    }
}

fn write_average(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    avg: &AveragedMetrics,
    support: usize,
    width: usize,
) -> fmt::Result {
    writeln!(
        f,
        "{:>width$} {:>9.prec$} {:>9.prec$} {:>9.prec$} {:>9}",
        name,
        avg.precision,
        avg.recall,
        avg.f1_score,
        support,
        width = width,
        prec = DIGITS
    )
}
