//! End-to-end tests over the public log → filter → aggregate pipeline,
//! using synthetic chromedriver-shaped log entries.

use pretty_assertions::assert_eq;
use renderbench::aggregator::{aggregate, GcSample};
use renderbench::parser::{collect_trace_events, PerfLogEntry};
use serde_json::json;

/// Wrap a devtools message the way chromedriver delivers it: the payload
/// is a JSON string nested inside the log entry.
fn log_entry(method: &str, params: serde_json::Value) -> PerfLogEntry {
    let payload = json!({
        "message": { "method": method, "params": params },
        "webview": "page-1"
    });
    PerfLogEntry {
        message: payload.to_string(),
        level: Some("INFO".to_string()),
        timestamp: Some(1_700_000_000_000),
    }
}

fn trace_entry(params: serde_json::Value) -> PerfLogEntry {
    log_entry("Tracing.dataCollected", params)
}

#[test]
fn full_pipeline_aggregates_a_realistic_log() {
    let entries = vec![
        log_entry("Network.requestWillBeSent", json!({ "requestId": "1" })),
        trace_entry(json!({ "name": "FunctionCall", "ph": "B", "tid": 7, "ts": 1000 })),
        trace_entry(json!({ "name": "Layout", "ph": "B", "tid": 7, "ts": 1100 })),
        trace_entry(json!({ "name": "Layout", "ph": "E", "tid": 7, "ts": 1250 })),
        log_entry("Network.responseReceived", json!({ "requestId": "1" })),
        trace_entry(json!({ "name": "Paint", "ph": "X", "ts": 1300, "tdur": 40 })),
        trace_entry(json!({ "name": "UpdateLayerTree", "ph": "X", "ts": 1320, "tdur": 10 })),
        trace_entry(json!({
            "name": "Document::updateStyle", "ph": "B", "tid": 7, "ts": 1400
        })),
        trace_entry(json!({
            "name": "Document::updateStyle", "ph": "E", "tid": 7, "ts": 1430
        })),
        trace_entry(json!({
            "name": "CSSParserImpl::parseStyleSheet", "ph": "B", "tid": 9, "ts": 1500
        })),
        trace_entry(json!({
            "name": "CSSParserImpl::parseStyleSheet", "ph": "E", "tid": 9, "ts": 1560
        })),
        trace_entry(json!({ "name": "FunctionCall", "ph": "E", "tid": 7, "ts": 2000 })),
        trace_entry(json!({
            "name": "MinorGC", "ph": "B", "tid": 7, "ts": 2100,
            "args": { "usedHeapSizeBefore": 8_000_000u64 }
        })),
        trace_entry(json!({
            "name": "MinorGC", "ph": "E", "tid": 7, "ts": 2150,
            "args": { "usedHeapSizeAfter": 5_000_000u64 }
        })),
        trace_entry(json!({ "name": "TimerFire", "ph": "B", "tid": 7, "ts": 2200 })),
    ];

    let events = collect_trace_events(&entries);
    let summary = aggregate(&events).unwrap();

    assert_eq!(summary.layout, 150);
    assert_eq!(summary.paint, 40);
    assert_eq!(summary.update_layer_tree, 10);
    assert_eq!(summary.recalc_styles, 30);
    assert_eq!(summary.parse_css, 60);
    assert_eq!(summary.js, 1000);
    assert_eq!(
        summary.gc,
        vec![GcSample {
            duration: 50,
            reclaimed_bytes: 3_000_000
        }]
    );
    // gc stays out of the combined total
    assert_eq!(summary.total_time, 150 + 40 + 10 + 30 + 60 + 1000);
}

#[test]
fn network_entries_never_reach_the_accumulators() {
    // A network event that would look like a Layout pair if it leaked through
    let entries = vec![
        log_entry(
            "Network.loadingFinished",
            json!({ "name": "Layout", "ph": "B", "tid": 1, "ts": 0 }),
        ),
        log_entry(
            "Network.loadingFinished",
            json!({ "name": "Layout", "ph": "E", "tid": 1, "ts": 500 }),
        ),
    ];

    let events = collect_trace_events(&entries);
    assert!(events.is_empty());

    let summary = aggregate(&events).unwrap();
    assert_eq!(summary.layout, 0);
    assert_eq!(summary.total_time, 0);
}

#[test]
fn total_time_equals_sum_of_non_gc_categories() {
    let entries = vec![
        trace_entry(json!({ "name": "Layout", "ph": "B", "tid": 1, "ts": 10 })),
        trace_entry(json!({ "name": "Layout", "ph": "E", "tid": 1, "ts": 35 })),
        trace_entry(json!({ "name": "Paint", "tdur": 7 })),
        trace_entry(json!({ "name": "FunctionCall", "ph": "B", "tid": 2, "ts": 100 })),
        trace_entry(json!({ "name": "FunctionCall", "ph": "E", "tid": 2, "ts": 180 })),
    ];

    let summary = aggregate(&collect_trace_events(&entries)).unwrap();

    let non_gc_sum = summary.layout
        + summary.paint
        + summary.recalc_styles
        + summary.update_layer_tree
        + summary.js
        + summary.parse_css;
    assert_eq!(summary.total_time, non_gc_sum);
}

#[test]
fn gc_sample_count_matches_matched_pairs() {
    let entries = vec![
        // Matched pair
        trace_entry(json!({
            "name": "MinorGC", "ph": "B", "tid": 1, "ts": 0,
            "args": { "usedHeapSizeBefore": 1000 }
        })),
        trace_entry(json!({
            "name": "MinorGC", "ph": "E", "tid": 1, "ts": 20,
            "args": { "usedHeapSizeAfter": 400 }
        })),
        // Begin left open
        trace_entry(json!({
            "name": "MinorGC", "ph": "B", "tid": 2, "ts": 50,
            "args": { "usedHeapSizeBefore": 2000 }
        })),
        // End on a thread with no open window
        trace_entry(json!({ "name": "MinorGC", "ph": "E", "tid": 3, "ts": 80 })),
    ];

    let summary = aggregate(&collect_trace_events(&entries)).unwrap();

    assert_eq!(summary.gc.len(), 1);
    assert_eq!(summary.gc[0].reclaimed_bytes, 600);
}

#[test]
fn repeated_aggregation_of_one_log_is_stable() {
    let entries = vec![
        trace_entry(json!({ "name": "Layout", "ph": "B", "tid": 1, "ts": 100 })),
        trace_entry(json!({ "name": "Layout", "ph": "E", "tid": 1, "ts": 150 })),
        trace_entry(json!({ "name": "Paint", "tdur": 30 })),
    ];

    let events = collect_trace_events(&entries);

    let first = aggregate(&events).unwrap();
    let second = aggregate(&events).unwrap();
    let third = aggregate(&events).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn summary_round_trips_through_report_json() {
    let entries = vec![
        trace_entry(json!({ "name": "UpdateLayerTree", "tdur": 25 })),
        trace_entry(json!({
            "name": "MinorGC", "ph": "B", "tid": 1, "ts": 0,
            "args": { "usedHeapSizeBefore": 900 }
        })),
        trace_entry(json!({
            "name": "MinorGC", "ph": "E", "tid": 1, "ts": 15,
            "args": { "usedHeapSizeAfter": 100 }
        })),
    ];

    let summary = aggregate(&collect_trace_events(&entries)).unwrap();
    let value = serde_json::to_value(&summary).unwrap();

    // Report keys match the established baseline format
    assert_eq!(value["updateLayerTree"], 25);
    assert_eq!(value["gc"][0]["duration"], 15);
    assert_eq!(value["gc"][0]["reclaimed_bytes"], 800);
    assert_eq!(value["total_time"], 25);
}
