//! Advisory recommendations about data collection.

use crate::models::Dataset;
use chrono::{DateTime, Duration, Utc};

/// Datasets smaller than this are flagged as too small.
pub const MIN_RECOMMENDED_RECORDS: usize = 100;

/// Minimum share of recent records before data is flagged as outdated.
pub const MIN_RECENT_RATIO: f64 = 0.1;

/// Emitted when the dataset is below [`MIN_RECOMMENDED_RECORDS`].
pub const LOW_VOLUME: &str = "Consider increasing data collection for more robust analysis";

/// Emitted when too few records fall within the recency window.
pub const OUTDATED: &str = "Data appears outdated - consider refreshing data sources";

/// Width of the recency window.
pub fn recency_window() -> Duration {
    Duration::hours(24)
}

/// Number of records whose timestamp is less than 24 hours before `now`.
pub fn recent_count(dataset: &Dataset, now: DateTime<Utc>) -> usize {
    let window = recency_window();
    dataset
        .iter()
        .filter(|r| now - r.timestamp < window)
        .count()
}

/// Derive recommendations, judging recency against the current time.
pub fn derive_recommendations(dataset: &Dataset) -> Vec<String> {
    derive_recommendations_at(dataset, Utc::now())
}

/// Derive recommendations, judging recency against `now`.
pub fn derive_recommendations_at(dataset: &Dataset, now: DateTime<Utc>) -> Vec<String> {
    let mut recommendations = Vec::new();

    if dataset.len() < MIN_RECOMMENDED_RECORDS {
        recommendations.push(LOW_VOLUME.to_string());
    }

    // An empty dataset has no recency ratio.
    if !dataset.is_empty() {
        let ratio = recent_count(dataset, now) as f64 / dataset.len() as f64;
        if ratio < MIN_RECENT_RATIO {
            recommendations.push(OUTDATED.to_string());
        }
    }

    recommendations
}
