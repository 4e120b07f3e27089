//! Record sources.
//!
//! A [`RecordSource`] supplies the dataset the pipeline analyzes. The
//! synthetic generator stands in for a real ingestion source.

pub mod synthetic;

pub use synthetic::*;

use crate::error::SourceError;
use crate::models::Dataset;

/// Anything that can produce a dataset for analysis.
pub trait RecordSource {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Produce the dataset.
    fn load(&self) -> Result<Dataset, SourceError>;
}
