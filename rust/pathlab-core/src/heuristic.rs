use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::{Graph, NodeId};

/// Estimated cost from a node to the goal the heuristic was built for.
///
/// `None` means the heuristic has no entry for the node; how that is treated
/// is decided by [`MissingHeuristic`]. Admissibility is never checked.
pub trait Heuristic {
    fn estimate(&self, node: NodeId) -> Option<f64>;
}

impl<F> Heuristic for F
where
    F: Fn(NodeId) -> Option<f64>,
{
    fn estimate(&self, node: NodeId) -> Option<f64> {
        self(node)
    }
}

/// `h = 0` everywhere; turns A* into uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _node: NodeId) -> Option<f64> {
        Some(0.0)
    }
}

/// What a search does when the heuristic has no entry for a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingHeuristic {
    /// Treat the node as `h = 0`. A warning is logged once per run because
    /// this quietly degrades A* towards uniform-cost behaviour.
    #[default]
    Zero,
    /// Fail the run with `SearchError::MissingHeuristic`.
    Error,
}

/// Dense per-node table of estimates.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicTable {
    values: Vec<Option<f64>>,
}

impl HeuristicTable {
    pub fn new(graph: &Graph) -> Self {
        HeuristicTable { values: vec![None; graph.len()] }
    }

    pub fn from_labels<'a, I>(graph: &Graph, entries: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut table = Self::new(graph);
        for (label, value) in entries {
            let node = graph.node(label).ok_or_else(|| GraphError::UnknownNode(label.to_string()))?;
            table.set(node, value).map_err(|_| GraphError::InvalidHeuristic { node: label.to_string(), value })?;
        }
        Ok(table)
    }

    /// Sets an estimate; values must be finite and non-negative.
    pub fn set(&mut self, node: NodeId, value: f64) -> Result<(), GraphError> {
        if !value.is_finite() || value < 0.0 {
            return Err(GraphError::InvalidHeuristic { node: format!("#{}", node.0), value });
        }
        if node.index() >= self.values.len() {
            return Err(GraphError::UnknownNode(format!("#{}", node.0)));
        }
        self.values[node.index()] = Some(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Heuristic for HeuristicTable {
    fn estimate(&self, node: NodeId) -> Option<f64> {
        self.values.get(node.index()).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn line() -> Graph {
        let mut b = GraphBuilder::undirected();
        b.add_edge("a", "b", 1.0).add_edge("b", "c", 1.0);
        b.build().unwrap()
    }

    #[test]
    fn table_reports_missing_entries_as_none() {
        let g = line();
        let h = HeuristicTable::from_labels(&g, [("a", 2.0), ("c", 0.0)]).unwrap();
        assert_eq!(h.estimate(NodeId(0)), Some(2.0));
        assert_eq!(h.estimate(NodeId(1)), None);
        assert_eq!(h.estimate(NodeId(9)), None);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn table_rejects_invalid_values() {
        let g = line();
        let err = HeuristicTable::from_labels(&g, [("b", -3.0)]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidHeuristic { node, value } if node == "b" && value == -3.0));
        assert!(HeuristicTable::from_labels(&g, [("b", f64::INFINITY)]).is_err());
    }

    #[test]
    fn closures_are_heuristics() {
        let h = |n: NodeId| if n.0 == 0 { Some(5.0) } else { None };
        assert_eq!(h.estimate(NodeId(0)), Some(5.0));
        assert_eq!(h.estimate(NodeId(1)), None);
        assert_eq!(ZeroHeuristic.estimate(NodeId(42)), Some(0.0));
    }

    #[test]
    fn missing_policy_deserializes_snake_case() {
        let p: MissingHeuristic = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(p, MissingHeuristic::Error);
        assert_eq!(MissingHeuristic::default(), MissingHeuristic::Zero);
    }
}
