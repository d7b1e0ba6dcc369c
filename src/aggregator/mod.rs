//! Aggregation of trace events into per-phase render timings.
//!
//! This module transforms a filtered devtools event stream into:
//! - Per-category time totals (layout, paint, style recalc, script, CSS parse)
//! - Structured MinorGC samples (duration + bytes reclaimed)
//! - A combined total render time

pub mod phases;

// Re-export main types and functions
pub use phases::{aggregate, Category, GcSample, Phase, RenderSummary};
