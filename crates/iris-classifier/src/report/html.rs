use maud::{html, Markup, DOCTYPE};

use crate::stats::{AveragedMetrics, ClassificationReport};

/// Render a classification report as a standalone HTML document.
pub fn render_html(report: &ClassificationReport, title: &str) -> String {
    let page = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                style { "table { border-collapse: collapse; } td, th { padding: 4px 12px; text-align: right; }" }
            }
            body {
                h1 { (title) }
                p { "Accuracy: " (format!("{:.4}", report.accuracy)) " on " (report.total_support) " samples" }
                table {
                    thead {
                        tr {
                            th { "class" }
                            th { "precision" }
                            th { "recall" }
                            th { "f1-score" }
                            th { "support" }
                        }
                    }
                    tbody {
                        @for class in &report.classes {
                            tr {
                                td { (class.name) }
                                td { (format!("{:.2}", class.precision)) }
                                td { (format!("{:.2}", class.recall)) }
                                td { (format!("{:.2}", class.f1_score)) }
                                td { (class.support) }
                            }
                        }
                        (average_row("macro avg", &report.macro_avg, report.total_support))
                        (average_row("weighted avg", &report.weighted_avg, report.total_support))
                    }
                }
            }
        }
    };
    page.into_string()
}

fn average_row(name: &str, avg: &AveragedMetrics, support: usize) -> Markup {
    html! {
        tr {
            td { (name) }
            td { (format!("{:.2}", avg.precision)) }
            td { (format!("{:.2}", avg.recall)) }
            td { (format!("{:.2}", avg.f1_score)) }
            td { (support) }
        }
    }
}
