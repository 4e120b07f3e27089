//! Markdown and JSON report generation.
//!
//! This module renders analysis reports and dataset exports for the
//! command-line front end.

use crate::models::{ExportBundle, Report, ReportSummary};
use anyhow::Result;

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("# DataPulse Report\n\n");
    output.push_str(&generate_summary_section(&report.summary));
    output.push_str(&generate_list_section("Insights", &report.insights));
    output.push_str(&generate_list_section(
        "Recommendations",
        &report.recommendations,
    ));
    output.push_str(&generate_footer());

    output
}

/// Generate the summary section.
fn generate_summary_section(summary: &ReportSummary) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");
    section.push_str("| Total Records | Average Value | Processing Time |\n");
    section.push_str("|:---:|:---:|:---:|\n");
    section.push_str(&format!(
        "| {} | {:.2} | {}ms |\n\n",
        summary.total_records, summary.average_value, summary.processing_time_ms
    ));

    section
}

/// Generate a numbered list section, or a placeholder line when empty.
fn generate_list_section(title: &str, items: &[String]) -> String {
    let mut section = format!("## {}\n\n", title);

    if items.is_empty() {
        section.push_str(&format!("No {} for this dataset.\n\n", title.to_lowercase()));
        return section;
    }

    for (i, item) in items.iter().enumerate() {
        section.push_str(&format!("{}. {}\n", i + 1, item));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    format!(
        "---\n\n*Report generated by DataPulse v{}*\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Generate the JSON form of a dataset export.
pub fn generate_export_json(export: &ExportBundle) -> Result<String> {
    serde_json::to_string_pretty(export).map_err(Into::into)
}
