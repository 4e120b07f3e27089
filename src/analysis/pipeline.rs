//! Pipeline orchestration.
//!
//! Runs the aggregator, insight engine and recommendation engine over a
//! single dataset snapshot and assembles the report.

use super::{derive_insights, derive_recommendations, summarize};
use crate::error::AnalysisError;
use crate::models::{Dataset, Report, ReportSummary};
use std::time::Instant;
use tracing::debug;

/// Run the full analysis over `dataset`.
///
/// Fails without a partial report if any component fails.
pub fn run_analysis(dataset: &Dataset) -> Result<Report, AnalysisError> {
    let start_time = Instant::now();

    let summary = summarize(dataset)?;
    let insights = derive_insights(dataset);
    let recommendations = derive_recommendations(dataset);

    let processing_time_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);

    debug!(
        "Analyzed {} records in {}ms ({} insights, {} recommendations)",
        summary.count,
        processing_time_ms,
        insights.len(),
        recommendations.len()
    );

    Ok(Report {
        summary: ReportSummary {
            total_records: summary.count,
            average_value: summary.average_value,
            processing_time_ms,
        },
        insights,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, CATEGORY_KEY};
    use crate::source::generate;
    use chrono::Utc;

    #[test]
    fn test_run_analysis_end_to_end() {
        let ds = generate(1000);
        let report = run_analysis(&ds).unwrap();

        assert_eq!(report.summary.total_records, 1000);
        assert!((1..=2).contains(&report.insights.len()));
        assert!(report.recommendations.len() <= 2);
        assert!((0.0..1000.0).contains(&report.summary.average_value));
    }

    #[test]
    fn test_run_analysis_small_dataset() {
        let ds: Dataset = [("A", 10.0), ("A", 10.0), ("B", 40.0)]
            .iter()
            .enumerate()
            .map(|(i, (c, v))| {
                Record::new(format!("record-{}", i + 1), Utc::now(), *v)
                    .with_metadata(CATEGORY_KEY, *c)
            })
            .collect();

        let report = run_analysis(&ds).unwrap();

        assert_eq!(report.summary.total_records, 3);
        assert_eq!(report.summary.average_value, 20.0);
        assert_eq!(
            report.insights,
            vec![
                "Category 'A' represents 67% of data",
                "1 records show significantly high values (>150% of average)",
            ]
        );
        assert_eq!(
            report.recommendations,
            vec!["Consider increasing data collection for more robust analysis"]
        );
    }

    #[test]
    fn test_run_analysis_fails_on_empty_dataset() {
        assert_eq!(
            run_analysis(&Dataset::default()),
            Err(AnalysisError::EmptyDataset)
        );
    }
}
