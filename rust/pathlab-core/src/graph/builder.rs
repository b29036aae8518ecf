use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use super::{Adjacency, Graph, Labels, NodeId};
use crate::error::GraphError;

type Row = IndexMap<NodeId, f64, BuildHasherDefault<FxHasher>>;

/// Accumulates labelled arcs and freezes them into a [`Graph`].
///
/// Re-adding an arc replaces its weight but keeps its first position in
/// the source row. Weights are validated in [`GraphBuilder::build`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    directed: bool,
    labels: Labels,
    rows: Vec<Row>,
}

impl GraphBuilder {
    pub fn undirected() -> Self {
        Self::default()
    }

    pub fn directed() -> Self {
        Self { directed: true, ..Self::default() }
    }

    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(i) = self.labels.get_index_of(label) {
            return NodeId(i as u32);
        }
        let (i, _) = self.labels.insert_full(label.to_string());
        self.rows.push(Row::default());
        NodeId(i as u32)
    }

    /// Adds the single arc `from -> to`.
    pub fn add_arc(&mut self, from: &str, to: &str, weight: f64) -> &mut Self {
        let u = self.add_node(from);
        let v = self.add_node(to);
        self.rows[u.index()].insert(v, weight);
        self
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> &mut Self {
        self.add_arc(a, b, weight).add_arc(b, a, weight)
    }

    /// Adds a whole adjacency row, preserving the order of `arcs`.
    pub fn add_row<'a, I>(&mut self, from: &str, arcs: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        self.add_node(from);
        for (to, w) in arcs {
            self.add_arc(from, to, w);
        }
        self
    }

    pub fn build(self) -> Result<Graph, GraphError> {
        let label = |n: &NodeId| self.labels.get_index(n.index()).cloned().unwrap_or_default();

        for (u, row) in self.rows.iter().enumerate() {
            let u = NodeId(u as u32);
            for (v, &w) in row {
                if !w.is_finite() || w < 0.0 {
                    return Err(GraphError::InvalidWeight { from: label(&u), to: label(v), weight: w });
                }
                if !self.directed && self.rows[v.index()].get(&u) != Some(&w) {
                    return Err(GraphError::Asymmetric { from: label(&u), to: label(v) });
                }
            }
        }

        let nodes = self.labels.len();
        let arcs: usize = self.rows.iter().map(Row::len).sum();
        let mut src = Vec::with_capacity(arcs);
        let mut dst = Vec::with_capacity(arcs);
        let mut w = Vec::with_capacity(arcs);
        for (u, row) in self.rows.iter().enumerate() {
            for (&v, &weight) in row {
                src.push(NodeId(u as u32));
                dst.push(v);
                w.push(weight);
            }
        }

        let out = Adjacency::build(nodes, &src, &dst, &w);
        let incoming = self.directed.then(|| Adjacency::build(nodes, &dst, &src, &w));
        Ok(Graph::from_parts(self.labels, out, incoming))
    }
}
