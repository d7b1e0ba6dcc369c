//! Performance log schema and decoding.
//!
//! This module handles:
//! - Wire types for chromedriver performance log entries
//! - Unwrapping the string-encoded devtools payloads
//! - Filtering out network instrumentation events

pub mod perf_log;
pub mod schema;

// Re-export main types
pub use perf_log::{collect_trace_events, decode_entries, decode_entry, filter_network};
pub use schema::{LogEnvelope, PerfLogEntry, TraceArgs, TraceEvent, TraceParams};
