//! Synthetic record generation.
//!
//! Produces uniformly distributed sample records over the trailing
//! 24 hours, optionally from a fixed seed so runs can be reproduced.

use super::RecordSource;
use crate::error::SourceError;
use crate::models::{Dataset, Record, CATEGORY_KEY, PRIORITY_KEY, SOURCE_KEY};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Category labels assigned to generated records.
pub const CATEGORIES: [&str; 3] = ["A", "B", "C"];

/// Provenance tag of generated records.
pub const GENERATED_SOURCE: &str = "generated";

/// Upper bound (exclusive) of generated values.
pub const MAX_VALUE: f64 = 1000.0;

const WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Generate `count` records using the thread-local RNG and the current time.
pub fn generate(count: usize) -> Dataset {
    generate_with(&mut rand::thread_rng(), count, Utc::now())
}

/// Generate `count` records from the given RNG, with timestamps in the
/// 24 hours ending at `now`.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Dataset {
    (0..count)
        .map(|i| {
            let age = Duration::milliseconds(rng.gen_range(0..WINDOW_MS));
            let category = CATEGORIES.choose(rng).copied().unwrap_or(CATEGORIES[0]);
            let priority: i64 = rng.gen_range(1..=5);

            Record::new(format!("record-{}", i + 1), now - age, rng.gen_range(0.0..MAX_VALUE))
                .with_metadata(CATEGORY_KEY, category)
                .with_metadata(PRIORITY_KEY, priority)
                .with_metadata(SOURCE_KEY, GENERATED_SOURCE)
        })
        .collect()
}

/// Record source backed by the synthetic generator.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    /// Number of records to generate.
    pub count: usize,
    /// Fixed RNG seed; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl SyntheticSource {
    pub fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl From<&crate::config::SourceConfig> for SyntheticSource {
    fn from(config: &crate::config::SourceConfig) -> Self {
        Self {
            count: config.record_count,
            seed: config.seed,
        }
    }
}

impl RecordSource for SyntheticSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&self) -> Result<Dataset, SourceError> {
        if self.count == 0 {
            return Err(SourceError::InvalidCount);
        }

        debug!("Generating {} records (seed: {:?})", self.count, self.seed);

        let now = Utc::now();
        let dataset = match self.seed {
            Some(seed) => generate_with(&mut StdRng::seed_from_u64(seed), self.count, now),
            None => generate_with(&mut rand::thread_rng(), self.count, now),
        };

        Ok(dataset)
    }
}
