//! Performance log decoding and the network-event filter.
//!
//! chromedriver hands back the performance log as JSON strings nested in
//! JSON; this module unwraps them into [`TraceEvent`]s and drops the
//! network instrumentation noise before aggregation.

use super::schema::{LogEnvelope, PerfLogEntry, TraceEvent};
use crate::utils::config::NETWORK_METHOD_PREFIX;
use crate::utils::error::ParseError;
use log::{debug, warn};

/// Decode a single log entry's string payload
pub fn decode_entry(entry: &PerfLogEntry) -> Result<LogEnvelope, ParseError> {
    let envelope: LogEnvelope = serde_json::from_str(&entry.message)?;
    Ok(envelope)
}

/// Decode all entries in collection order.
///
/// Entries whose payload fails to parse are logged and skipped rather than
/// failing the whole run; browsers occasionally emit truncated messages
/// during teardown.
pub fn decode_entries(entries: &[PerfLogEntry]) -> Vec<TraceEvent> {
    let mut events = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match decode_entry(entry) {
            Ok(envelope) => events.push(envelope.message),
            Err(e) => {
                warn!("Failed to decode log entry {}: {}", index, e);
            }
        }
    }

    events
}

/// Drop network instrumentation events, preserving relative order.
///
/// The check is purely on the devtools method prefix; everything else
/// passes through unchanged. Malformed events are not this function's
/// concern, they surface (if at all) in the aggregator.
pub fn filter_network(events: Vec<TraceEvent>) -> Vec<TraceEvent> {
    let before = events.len();

    let kept: Vec<TraceEvent> = events
        .into_iter()
        .filter(|event| !event.method.starts_with(NETWORK_METHOD_PREFIX))
        .collect();

    debug!(
        "Filtered {} network events ({} -> {})",
        before - kept.len(),
        before,
        kept.len()
    );

    kept
}

/// Decode raw log entries and strip network events in one step
pub fn collect_trace_events(entries: &[PerfLogEntry]) -> Vec<TraceEvent> {
    filter_network(decode_entries(entries))
}
