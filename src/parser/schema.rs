//! Wire schema for chromedriver performance log entries.
//!
//! Each log entry wraps its devtools payload as a JSON *string* in the
//! `message` field; the payload in turn nests the actual trace event under
//! a second `message` key. The structs here mirror exactly the fields the
//! aggregator consumes; everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

/// One raw entry from the WebDriver performance log endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfLogEntry {
    /// Devtools payload, JSON-encoded as a string by chromedriver
    pub message: String,

    /// Log level reported by the browser (e.g. "INFO")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Wall-clock timestamp of log collection, milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// Decoded `message` payload of a [`PerfLogEntry`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEnvelope {
    pub message: TraceEvent,

    /// Target webview identifier, present on multi-target sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webview: Option<String>,
}

/// A single devtools event: the unit the filter and aggregator operate on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Devtools method, e.g. "Tracing.dataCollected" or "Network.requestWillBeSent"
    pub method: String,

    #[serde(default)]
    pub params: TraceParams,
}

/// Trace event parameters. All fields are optional on the wire; the
/// aggregator validates presence per category branch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceParams {
    /// Instrumented event name, e.g. "Layout", "Paint", "MinorGC"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Phase marker: "B" begins a window, "E" ends one; anything else is
    /// treated as a self-contained instant event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<String>,

    /// Emitting thread id; Begin/End pairs only match within a thread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<u64>,

    /// Monotonic timestamp in microseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<u64>,

    /// Thread-clock duration in microseconds, present on instant events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdur: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<TraceArgs>,
}

/// Auxiliary event payload. Only the MinorGC heap counters are typed;
/// any other keys ride along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceArgs {
    #[serde(
        default,
        rename = "usedHeapSizeBefore",
        skip_serializing_if = "Option::is_none"
    )]
    pub used_heap_size_before: Option<u64>,

    #[serde(
        default,
        rename = "usedHeapSizeAfter",
        skip_serializing_if = "Option::is_none"
    )]
    pub used_heap_size_after: Option<u64>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl TraceEvent {
    /// Convenience constructor used heavily by tests
    pub fn new(method: impl Into<String>, params: TraceParams) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}
