//! Analysis modules.
//!
//! The aggregator, insight engine and recommendation engine are pure
//! readers of a [`Dataset`](crate::models::Dataset); the pipeline runs all
//! three over one snapshot and assembles the report.

pub mod aggregator;
pub mod insights;
pub mod pipeline;
pub mod recommendations;

pub use aggregator::*;
pub use insights::*;
pub use pipeline::*;
pub use recommendations::*;
