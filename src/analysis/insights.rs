//! Descriptive insights about a dataset's composition.
//!
//! Two independent findings are produced, in this order:
//!
//! - **Dominant category**: the category label carried by the most records.
//! - **High-value outliers**: records whose value exceeds 150% of the mean.

use super::round_half_up;
use crate::models::Dataset;
use std::collections::BTreeMap;

/// Multiplier of the mean above which a value counts as an outlier.
pub const OUTLIER_FACTOR: f64 = 1.5;

/// Tally records by category label.
///
/// Records without a textual category are not counted.
pub fn category_counts(dataset: &Dataset) -> BTreeMap<&str, usize> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for category in dataset.iter().filter_map(|r| r.category()) {
        *counts.entry(category).or_default() += 1;
    }

    counts
}

/// The most frequent category and its count.
///
/// Ties go to the lexicographically smallest label.
pub fn dominant_category(dataset: &Dataset) -> Option<(&str, usize)> {
    category_counts(dataset)
        .into_iter()
        .max_by(|(a_cat, a_count), (b_cat, b_count)| {
            a_count.cmp(b_count).then_with(|| b_cat.cmp(a_cat))
        })
}

/// Number of records whose value exceeds `OUTLIER_FACTOR` times the mean.
pub fn high_value_count(dataset: &Dataset) -> usize {
    let Some(mean) = dataset.mean_value() else {
        return 0;
    };
    let threshold = mean * OUTLIER_FACTOR;

    dataset.iter().filter(|r| r.value > threshold).count()
}

/// Derive the ordered list of insights for a dataset.
pub fn derive_insights(dataset: &Dataset) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some((category, count)) = dominant_category(dataset) {
        let pct = round_half_up(count as f64 / dataset.len() as f64 * 100.0);
        insights.push(format!("Category '{}' represents {}% of data", category, pct));
    }

    let outliers = high_value_count(dataset);
    if outliers > 0 {
        insights.push(format!(
            "{} records show significantly high values (>150% of average)",
            outliers
        ));
    }

    insights
}
