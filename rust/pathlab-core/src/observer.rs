//! Structured search events.
//!
//! Strategies report what they do through an [`Observer`] instead of
//! printing; the default [`NoopObserver`] costs one virtual call per event.

use serde::Serialize;
use tracing::trace;

use crate::graph::{Graph, NodeId};

/// Which half of a bidirectional search produced an event. Unidirectional
/// strategies always report `Forward`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Forward,
    Backward,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent {
    /// A node was taken off the frontier and its successors generated.
    Expand { node: NodeId, g: f64, f: f64, side: Side },
    Enqueue { node: NodeId, g: f64, f: f64, side: Side },
    /// A memory-bounded frontier dropped a candidate.
    Evict { node: NodeId, f: f64 },
    /// IDA* pruned a node whose f exceeded the current bound.
    Cutoff { node: NodeId, f: f64, bound: f64 },
    /// IDA* started a new depth-first probe.
    Iteration { bound: f64 },
    /// Both halves of a bidirectional search closed `node`.
    Meet { node: NodeId, cost: f64 },
    Goal { node: NodeId, cost: f64 },
}

pub trait Observer {
    fn on_event(&mut self, event: &SearchEvent);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline(always)]
    fn on_event(&mut self, _event: &SearchEvent) {}
}

/// Logs every event at `trace` level with node labels resolved.
#[derive(Clone, Copy, Debug)]
pub struct TracingObserver<'g> {
    graph: &'g Graph,
}

impl<'g> TracingObserver<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }
}

impl Observer for TracingObserver<'_> {
    fn on_event(&mut self, event: &SearchEvent) {
        let graph = self.graph;
        match *event {
            SearchEvent::Expand { node, g: cost, f, side } => {
                trace!(node = graph.label(node), g = cost, f, ?side, "expand")
            }
            SearchEvent::Enqueue { node, g: cost, f, side } => {
                trace!(node = graph.label(node), g = cost, f, ?side, "enqueue")
            }
            SearchEvent::Evict { node, f } => trace!(node = graph.label(node), f, "evict"),
            SearchEvent::Cutoff { node, f, bound } => trace!(node = graph.label(node), f, bound, "cutoff"),
            SearchEvent::Iteration { bound } => trace!(bound, "iteration"),
            SearchEvent::Meet { node, cost } => trace!(node = graph.label(node), cost, "meet"),
            SearchEvent::Goal { node, cost } => trace!(node = graph.label(node), cost, "goal"),
        }
    }
}

/// Keeps every event in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<SearchEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expansions(&self) -> impl Iterator<Item = (NodeId, Side)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SearchEvent::Expand { node, side, .. } => Some((node, side)),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&SearchEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Observer for RecordingObserver {
    fn on_event(&mut self, event: &SearchEvent) {
        self.events.push(event.clone());
    }
}
