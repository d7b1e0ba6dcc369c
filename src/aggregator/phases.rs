//! Reduction of a filtered trace event stream into per-phase render timings.
//!
//! Chrome emits rendering work as interleaved Begin/End markers across
//! threads, plus instant events that already carry their own duration.
//! A single forward pass matches Begin/End pairs per (category, thread)
//! and sums durations per rendering phase.

use crate::parser::schema::{TraceEvent, TraceParams};
use crate::utils::error::AggregateError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Logical rendering phase, mapped from raw Chrome trace event names.
///
/// Adding a phase is a deliberate change: extend this enum, the name
/// mapping, and the corresponding [`RenderSummary`] accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Layout,
    Paint,
    UpdateLayerTree,
    RecalcStyles,
    Js,
    ParseCss,
    Gc,
}

impl Category {
    /// Map a raw trace event name to its logical category.
    ///
    /// Unknown names return `None` and are ignored by the aggregator,
    /// which keeps the harness forward compatible with new trace events.
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "Layout" => Some(Category::Layout),
            "Paint" => Some(Category::Paint),
            "UpdateLayerTree" => Some(Category::UpdateLayerTree),
            "Document::updateStyle" => Some(Category::RecalcStyles),
            "FunctionCall" => Some(Category::Js),
            "CSSParserImpl::parseStyleSheet" => Some(Category::ParseCss),
            "MinorGC" => Some(Category::Gc),
            _ => None,
        }
    }

    /// Report key for this category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Paint => "paint",
            Category::UpdateLayerTree => "updateLayerTree",
            Category::RecalcStyles => "recalc_styles",
            Category::Js => "js",
            Category::ParseCss => "parse_css",
            Category::Gc => "gc",
        }
    }

    /// Paint and UpdateLayerTree arrive as instant events carrying `tdur`;
    /// every other category uses Begin/End pairing.
    fn is_direct_duration(&self) -> bool {
        matches!(self, Category::Paint | Category::UpdateLayerTree)
    }
}

/// Phase marker on a trace event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Begin,
    End,
    Instant,
}

impl Phase {
    /// "B" and "E" are the pairing markers; every other value (or a
    /// missing `ph`) is a self-contained event.
    pub fn from_ph(ph: Option<&str>) -> Self {
        match ph {
            Some("B") => Phase::Begin,
            Some("E") => Phase::End,
            _ => Phase::Instant,
        }
    }
}

/// One matched MinorGC window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcSample {
    /// Microseconds between the Begin and End markers
    pub duration: u64,

    /// Heap bytes freed across the window. Signed: the heap can grow
    /// while a collection window is open.
    pub reclaimed_bytes: i64,
}

/// Aggregated per-phase render timings for one benchmark run.
///
/// All scalar fields are summed microseconds. `gc` keeps one sample per
/// matched MinorGC pair and is deliberately excluded from `total_time`:
/// collection cost overlaps the other phases and would double-count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSummary {
    pub layout: u64,
    pub paint: u64,
    pub recalc_styles: u64,
    #[serde(rename = "updateLayerTree")]
    pub update_layer_tree: u64,
    pub js: u64,
    pub parse_css: u64,
    pub gc: Vec<GcSample>,
    pub total_time: u64,
}

/// Value tracked for an unmatched Begin marker
struct OpenEvent {
    ts: u64,
    heap_before: Option<u64>,
}

/// Accumulators for one aggregation pass
#[derive(Default)]
struct Accumulators {
    layout: Vec<u64>,
    paint: Vec<u64>,
    recalc_styles: Vec<u64>,
    update_layer_tree: Vec<u64>,
    js: Vec<u64>,
    parse_css: Vec<u64>,
    gc: Vec<GcSample>,
}

impl Accumulators {
    fn durations_for(&mut self, category: Category) -> &mut Vec<u64> {
        match category {
            Category::Layout => &mut self.layout,
            Category::Paint => &mut self.paint,
            Category::RecalcStyles => &mut self.recalc_styles,
            Category::UpdateLayerTree => &mut self.update_layer_tree,
            Category::Js => &mut self.js,
            Category::ParseCss => &mut self.parse_css,
            // Gc accumulates structured samples, handled separately
            Category::Gc => unreachable!("gc accumulates GcSample pairs"),
        }
    }
}

/// Reduce a filtered event stream to a [`RenderSummary`].
///
/// Single forward pass in input order. The open-event table lives on the
/// stack of this call, so repeated invocations are fully independent.
///
/// Matching policy, kept for compatibility with prior report baselines:
/// - A second Begin for the same (category, thread) overwrites the first;
///   the earlier window is silently lost.
/// - An End with no open Begin is silently dropped.
/// - Windows still open when the stream ends contribute nothing.
///
/// # Errors
/// [`AggregateError::MalformedEntry`] when an event names a recognized
/// category but lacks a field that category's branch requires.
pub fn aggregate(events: &[TraceEvent]) -> Result<RenderSummary, AggregateError> {
    let mut acc = Accumulators::default();
    let mut open: HashMap<(Category, u64), OpenEvent> = HashMap::new();

    for event in events {
        let Some(name) = event.params.name.as_deref() else {
            continue;
        };
        let Some(category) = Category::from_event_name(name) else {
            continue;
        };

        if category.is_direct_duration() {
            let tdur = require(category, "tdur", event.params.tdur)?;
            acc.durations_for(category).push(tdur);
            continue;
        }

        match Phase::from_ph(event.params.ph.as_deref()) {
            Phase::Begin => {
                let tid = require(category, "tid", event.params.tid)?;
                let ts = require(category, "ts", event.params.ts)?;
                let heap_before = if category == Category::Gc {
                    Some(require(
                        category,
                        "usedHeapSizeBefore",
                        args_heap_before(&event.params),
                    )?)
                } else {
                    None
                };
                // Overwrites any prior unmatched Begin for this key
                open.insert((category, tid), OpenEvent { ts, heap_before });
            }
            Phase::End => {
                let tid = require(category, "tid", event.params.tid)?;
                let ts = require(category, "ts", event.params.ts)?;
                let Some(begun) = open.remove(&(category, tid)) else {
                    // No open window on this thread; drop the End
                    continue;
                };
                let duration = ts.saturating_sub(begun.ts);

                if category == Category::Gc {
                    let after =
                        require(category, "usedHeapSizeAfter", args_heap_after(&event.params))?;
                    let before =
                        require(category, "usedHeapSizeBefore", begun.heap_before)?;
                    acc.gc.push(GcSample {
                        duration,
                        reclaimed_bytes: before as i64 - after as i64,
                    });
                } else {
                    acc.durations_for(category).push(duration);
                }
            }
            // Paired categories never emit instant markers we care about
            Phase::Instant => {}
        }
    }

    if !open.is_empty() {
        debug!("{} events still open at end of trace, dropped", open.len());
    }

    Ok(RenderSummary::from_accumulators(acc))
}

impl RenderSummary {
    fn from_accumulators(acc: Accumulators) -> Self {
        let layout: u64 = acc.layout.iter().sum();
        let paint: u64 = acc.paint.iter().sum();
        let recalc_styles: u64 = acc.recalc_styles.iter().sum();
        let update_layer_tree: u64 = acc.update_layer_tree.iter().sum();
        let js: u64 = acc.js.iter().sum();
        let parse_css: u64 = acc.parse_css.iter().sum();

        Self {
            layout,
            paint,
            recalc_styles,
            update_layer_tree,
            js,
            parse_css,
            gc: acc.gc,
            total_time: layout + paint + recalc_styles + update_layer_tree + js + parse_css,
        }
    }

    /// Total bytes reclaimed across all matched GC windows
    pub fn gc_reclaimed_bytes(&self) -> i64 {
        self.gc.iter().map(|sample| sample.reclaimed_bytes).sum()
    }

    /// Total time spent in GC windows (not part of `total_time`)
    pub fn gc_time(&self) -> u64 {
        self.gc.iter().map(|sample| sample.duration).sum()
    }
}

fn require<T>(
    category: Category,
    field: &'static str,
    value: Option<T>,
) -> Result<T, AggregateError> {
    value.ok_or(AggregateError::MalformedEntry {
        category: category.label(),
        field,
    })
}

fn args_heap_before(params: &TraceParams) -> Option<u64> {
    params.args.as_ref().and_then(|a| a.used_heap_size_before)
}

fn args_heap_after(params: &TraceParams) -> Option<u64> {
    params.args.as_ref().and_then(|a| a.used_heap_size_after)
}
