//! Data models for the analysis pipeline.
//!
//! This module contains the core data structures used throughout
//! the application for representing records, datasets, and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Metadata key holding the record's category label.
pub const CATEGORY_KEY: &str = "category";

/// Metadata key holding the record's priority (1-5).
pub const PRIORITY_KEY: &str = "priority";

/// Metadata key holding the record's provenance.
pub const SOURCE_KEY: &str = "source";

/// A scalar metadata value attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl MetadataValue {
    /// Returns the value as a string slice if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Bool(b) => write!(f, "{}", b),
            MetadataValue::Integer(n) => write!(f, "{}", n),
            MetadataValue::Float(x) => write!(f, "{}", x),
            MetadataValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        MetadataValue::Integer(n)
    }
}

/// A single timestamped observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier (uniqueness is expected, not enforced).
    pub id: String,
    /// When the observation was made.
    pub timestamp: DateTime<Utc>,
    /// Numeric magnitude of the observation.
    pub value: f64,
    /// Open key/value metadata.
    #[serde(default)]
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl Record {
    /// Creates a record with empty metadata.
    pub fn new(id: impl Into<String>, timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            id: id.into(),
            timestamp,
            value,
            metadata: BTreeMap::new(),
        }
    }

    /// Adds a metadata entry, returning the record.
    pub fn with_metadata(mut self, key: &str, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// Returns the `category` label if present and textual.
    pub fn category(&self) -> Option<&str> {
        self.metadata.get(CATEGORY_KEY).and_then(MetadataValue::as_str)
    }

    /// Returns the `priority` if present and integral.
    pub fn priority(&self) -> Option<i64> {
        self.metadata.get(PRIORITY_KEY).and_then(MetadataValue::as_i64)
    }
}

/// An immutable, shareable collection of records.
///
/// Cloning a `Dataset` is cheap; every clone observes the same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Default for Dataset {
    fn default() -> Self {
        Vec::new().into()
    }
}

impl Dataset {
    /// Returns the records as a slice.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Sum of all record values.
    pub fn value_sum(&self) -> f64 {
        self.records.iter().map(|r| r.value).sum()
    }

    /// Arithmetic mean of record values, or `None` for an empty dataset.
    pub fn mean_value(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.value_sum() / self.len() as f64)
        }
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Summary statistics of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Number of records analyzed.
    pub total_records: usize,
    /// Mean record value, rounded to 2 decimals.
    pub average_value: f64,
    /// Wall-clock duration of the analysis in milliseconds.
    #[serde(rename = "processingTime")]
    pub processing_time_ms: u64,
}

/// The complete analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Summary statistics.
    pub summary: ReportSummary,
    /// Descriptive findings about the dataset.
    pub insights: Vec<String>,
    /// Advisory statements about data collection.
    pub recommendations: Vec<String>,
}

/// Metadata attached to an export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// When the export was produced.
    pub export_time: DateTime<Utc>,
    /// Number of exported records.
    pub record_count: usize,
    /// Version of the system that produced the export.
    pub system_version: String,
}

/// The dataset together with export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    pub data: Dataset,
    pub metadata: ExportMetadata,
}
