//! Report schema definitions.
//!
//! This module defines the structure of report files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::RenderSummary;
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One benchmark measurement: a single run of one implementation of one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Implementation variant that was rendered
    pub implementation: String,

    /// Scenario name
    pub scenario: String,

    /// Run index, 1-based
    pub run: u32,

    /// Aggregated per-phase timings for this run
    pub results: RenderSummary,
}

/// Top-level report structure written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// All measurements from this benchmarking session
    pub records: Vec<BenchmarkRecord>,
}

impl Report {
    /// Create a report stamped with the current schema version and time
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            records,
        }
    }
}
