use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Graph, GraphBuilder};
use crate::error::GraphError;
use crate::heuristic::HeuristicTable;

/// JSON map document: a dict-of-dict adjacency plus a heuristic table.
///
/// ```json
/// {
///   "directed": false,
///   "graph": { "A": { "B": 1.0 }, "B": { "A": 1.0 } },
///   "heuristic": { "A": 1.0, "B": 0.0 },
///   "start": "A",
///   "goal": "B"
/// }
/// ```
///
/// Key order is preserved, so neighbor order (and with it tie-breaking and
/// expansion counts) follows the document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapFile {
    #[serde(default)]
    pub directed: bool,
    pub graph: IndexMap<String, IndexMap<String, f64>>,
    #[serde(default)]
    pub heuristic: IndexMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

impl MapFile {
    pub fn from_json_str(s: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn graph(&self) -> Result<Graph, GraphError> {
        let mut builder = if self.directed { GraphBuilder::directed() } else { GraphBuilder::undirected() };
        for (from, row) in &self.graph {
            builder.add_row(from, row.iter().map(|(to, &w)| (to.as_str(), w)));
        }
        builder.build()
    }

    /// Heuristic table over `graph`; labels absent from the graph are rejected.
    pub fn heuristic(&self, graph: &Graph) -> Result<HeuristicTable, GraphError> {
        HeuristicTable::from_labels(graph, self.heuristic.iter().map(|(k, &v)| (k.as_str(), v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;

    const DIRECTED: &str = r#"{
        "directed": true,
        "graph": {
            "A": {"B": 1, "C": 4},
            "B": {"D": 2},
            "C": {"E": 3},
            "D": {"E": 1},
            "E": {}
        },
        "heuristic": {"A": 3, "B": 2, "C": 1, "D": 1, "E": 0},
        "start": "A",
        "goal": "E"
    }"#;

    #[test]
    fn loads_directed_map_with_sink() {
        let map = MapFile::from_json_str(DIRECTED).unwrap();
        assert_eq!(map.start.as_deref(), Some("A"));
        let g = map.graph().unwrap();
        assert!(g.is_directed());
        assert_eq!(g.len(), 5);
        let e = g.node("E").unwrap();
        assert_eq!(g.neighbors(e).count(), 0);
        assert_eq!(g.predecessors(e).count(), 2);
        let h = map.heuristic(&g).unwrap();
        assert_eq!(h.estimate(g.node("A").unwrap()), Some(3.0));
    }

    #[test]
    fn heuristic_for_unknown_label_is_rejected() {
        let map = MapFile::from_json_str(r#"{"graph": {"A": {}}, "heuristic": {"Q": 1}}"#).unwrap();
        let g = map.graph().unwrap();
        assert!(matches!(map.heuristic(&g), Err(GraphError::UnknownNode(n)) if n == "Q"));
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        assert!(matches!(MapFile::from_json_str("{"), Err(GraphError::Json(_))));
    }

    #[test]
    fn defaults_to_undirected() {
        let map = MapFile::from_json_str(r#"{"graph": {"A": {"B": 2}, "B": {"A": 2}}}"#).unwrap();
        assert!(!map.directed);
        assert!(map.heuristic.is_empty());
        assert!(!map.graph().unwrap().is_directed());
    }
}
