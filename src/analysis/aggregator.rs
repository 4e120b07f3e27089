//! Summary statistics over a dataset.

use crate::error::AnalysisError;
use crate::models::Dataset;

/// Count and rounded mean of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of records.
    pub count: usize,
    /// Mean value rounded to 2 decimals.
    pub average_value: f64,
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to 2 decimal places, halves toward positive infinity.
pub fn round2(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Compute the summary statistics of a dataset.
///
/// An empty dataset has no mean and yields [`AnalysisError::EmptyDataset`].
pub fn summarize(dataset: &Dataset) -> Result<Summary, AnalysisError> {
    let mean = dataset.mean_value().ok_or(AnalysisError::EmptyDataset)?;

    Ok(Summary {
        count: dataset.len(),
        average_value: round2(mean),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::source::generate;
    use chrono::Utc;

    fn dataset(values: &[f64]) -> Dataset {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Record::new(format!("record-{}", i + 1), Utc::now(), *v))
            .collect()
    }

    #[test]
    fn test_summarize_counts_and_rounds() {
        let summary = summarize(&dataset(&[1.0, 2.0, 2.0])).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_value, 1.67);
    }

    #[test]
    fn test_summarize_empty_dataset() {
        assert_eq!(
            summarize(&Dataset::default()),
            Err(AnalysisError::EmptyDataset)
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(28.0), 28.0);
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.675_000_1), 2.68);
        assert_eq!(round2(-1.234), -1.23);
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_summarize_negative_half_mean() {
        let summary = summarize(&dataset(&[-0.125])).unwrap();
        assert_eq!(summary.average_value, -0.12);

        let summary = summarize(&dataset(&[-0.5, 0.25])).unwrap();
        assert_eq!(summary.average_value, -0.12);
    }

    #[test]
    fn test_average_within_rounding_of_true_mean() {
        for _ in 0..20 {
            let ds = generate(137);
            let true_mean = ds.value_sum() / ds.len() as f64;
            let summary = summarize(&ds).unwrap();

            assert_eq!(summary.count, ds.len());
            assert!((summary.average_value - true_mean).abs() <= 0.005 + 1e-9);
        }
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let ds = generate(64);
        assert_eq!(summarize(&ds), summarize(&ds));
    }
}
