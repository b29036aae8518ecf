//! The Romania road map and straight-line distances to Bucharest.

use indexmap::IndexMap;

use crate::error::GraphError;
use crate::graph::{Graph, GraphBuilder, MapFile};
use crate::heuristic::HeuristicTable;

pub const START: &str = "Arad";
pub const GOAL: &str = "Bucharest";

/// Adjacency rows in their canonical order; row order decides tie-breaking.
pub const ROADS: &[(&str, &[(&str, f64)])] = &[
    ("Arad", &[("Zerind", 75.0), ("Sibiu", 140.0), ("Timisoara", 118.0)]),
    ("Zerind", &[("Arad", 75.0), ("Oradea", 71.0)]),
    ("Oradea", &[("Zerind", 71.0), ("Sibiu", 151.0)]),
    ("Sibiu", &[("Arad", 140.0), ("Oradea", 151.0), ("Fagaras", 99.0), ("Rimnicu Vilcea", 80.0)]),
    ("Fagaras", &[("Sibiu", 99.0), ("Bucharest", 211.0)]),
    ("Rimnicu Vilcea", &[("Sibiu", 80.0), ("Pitesti", 97.0), ("Craiova", 146.0)]),
    ("Timisoara", &[("Arad", 118.0), ("Lugoj", 111.0)]),
    ("Lugoj", &[("Timisoara", 111.0), ("Mehadia", 70.0)]),
    ("Mehadia", &[("Lugoj", 70.0), ("Drobeta", 75.0)]),
    ("Drobeta", &[("Mehadia", 75.0), ("Craiova", 120.0)]),
    ("Craiova", &[("Drobeta", 120.0), ("Rimnicu Vilcea", 146.0), ("Pitesti", 138.0)]),
    ("Pitesti", &[("Rimnicu Vilcea", 97.0), ("Craiova", 138.0), ("Bucharest", 101.0)]),
    ("Bucharest", &[("Fagaras", 211.0), ("Pitesti", 101.0), ("Giurgiu", 90.0), ("Urziceni", 85.0)]),
    ("Giurgiu", &[("Bucharest", 90.0)]),
    ("Urziceni", &[("Bucharest", 85.0), ("Hirsova", 98.0), ("Vaslui", 142.0)]),
    ("Hirsova", &[("Urziceni", 98.0), ("Eforie", 86.0)]),
    ("Eforie", &[("Hirsova", 86.0)]),
    ("Vaslui", &[("Urziceni", 142.0), ("Iasi", 92.0)]),
    ("Iasi", &[("Vaslui", 92.0), ("Neamt", 87.0)]),
    ("Neamt", &[("Iasi", 87.0)]),
];

/// Straight-line distance to Bucharest.
pub const STRAIGHT_LINE: &[(&str, f64)] = &[
    ("Arad", 366.0),
    ("Bucharest", 0.0),
    ("Craiova", 160.0),
    ("Drobeta", 242.0),
    ("Eforie", 161.0),
    ("Fagaras", 176.0),
    ("Giurgiu", 77.0),
    ("Hirsova", 151.0),
    ("Iasi", 226.0),
    ("Lugoj", 244.0),
    ("Mehadia", 241.0),
    ("Neamt", 234.0),
    ("Oradea", 380.0),
    ("Pitesti", 100.0),
    ("Rimnicu Vilcea", 193.0),
    ("Sibiu", 253.0),
    ("Timisoara", 329.0),
    ("Urziceni", 80.0),
    ("Vaslui", 199.0),
    ("Zerind", 374.0),
];

pub fn graph() -> Result<Graph, GraphError> {
    let mut b = GraphBuilder::undirected();
    for &(city, roads) in ROADS {
        b.add_row(city, roads.iter().copied());
    }
    b.build()
}

pub fn heuristic(graph: &Graph) -> Result<HeuristicTable, GraphError> {
    HeuristicTable::from_labels(graph, STRAIGHT_LINE.iter().copied())
}

/// The same map as a [`MapFile`] document, with `Arad -> Bucharest` as the
/// default query.
pub fn map_file() -> MapFile {
    let graph = ROADS
        .iter()
        .map(|&(city, roads)| {
            let row: IndexMap<String, f64> = roads.iter().map(|&(to, w)| (to.to_string(), w)).collect();
            (city.to_string(), row)
        })
        .collect();
    let heuristic = STRAIGHT_LINE.iter().map(|&(city, h)| (city.to_string(), h)).collect();
    MapFile {
        directed: false,
        graph,
        heuristic,
        start: Some(START.to_string()),
        goal: Some(GOAL.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;

    #[test]
    fn twenty_cities_and_symmetric_roads() {
        let g = graph().unwrap();
        assert_eq!(g.len(), 20);
        assert_eq!(g.arc_count(), 46);
        let h = heuristic(&g).unwrap();
        assert_eq!(h.len(), 20);
        assert_eq!(h.estimate(g.node(GOAL).unwrap()), Some(0.0));
    }

    #[test]
    fn map_file_matches_builder() {
        let doc = map_file();
        let text = serde_json::to_string(&doc).unwrap();
        let back = MapFile::from_json_str(&text).unwrap();
        assert_eq!(back, doc);
        let from_doc = back.graph().unwrap();
        let built = graph().unwrap();
        for n in built.nodes() {
            let a: Vec<_> = built.neighbors(n).map(|(v, w)| (built.label(v), w)).collect();
            let m = from_doc.node(built.label(n)).unwrap();
            let b: Vec<_> = from_doc.neighbors(m).map(|(v, w)| (from_doc.label(v), w)).collect();
            assert_eq!(a, b);
        }
    }
}
