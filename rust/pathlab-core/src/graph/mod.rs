//! Static weighted graphs.
//!
//! Labels are interned into dense [`NodeId`]s when the graph is built; the
//! adjacency is frozen afterwards and shared read-only by every search.

pub mod adjacency;
pub mod builder;
pub mod map_file;

use std::hash::BuildHasherDefault;

use indexmap::IndexSet;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

pub use adjacency::Adjacency;
pub use builder::GraphBuilder;
pub use map_file::MapFile;

pub(crate) type Labels = IndexSet<String, BuildHasherDefault<FxHasher>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub struct Graph {
    labels: Labels,
    out: Adjacency,
    // Present only for directed graphs; undirected graphs answer
    // `predecessors` from `out`.
    incoming: Option<Adjacency>,
}

impl Graph {
    pub(crate) fn from_parts(labels: Labels, out: Adjacency, incoming: Option<Adjacency>) -> Self {
        Graph { labels, out, incoming }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_directed(&self) -> bool {
        self.incoming.is_some()
    }

    pub fn arc_count(&self) -> usize {
        self.out.arc_count()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.labels.len()
    }

    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.labels.get_index_of(label).map(|i| NodeId(i as u32))
    }

    /// Resolves a label, failing with [`SearchError::NodeNotFound`].
    pub fn require(&self, label: &str) -> Result<NodeId> {
        self.node(label).ok_or_else(|| SearchError::NodeNotFound(label.to_string()))
    }

    pub fn label(&self, node: NodeId) -> &str {
        self.labels.get_index(node.index()).map(String::as_str).unwrap_or("<unknown>")
    }

    pub fn labels_of(&self, path: &[NodeId]) -> Vec<&str> {
        path.iter().map(|&n| self.label(n)).collect()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.labels.len() as u32).map(NodeId)
    }

    /// Out-arcs of `node` in insertion order.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.out.arcs(node)
    }

    /// In-arcs of `node`, i.e. the arcs a backward search walks.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.incoming.as_ref().unwrap_or(&self.out).arcs(node)
    }

    pub(crate) fn out_row(&self, node: NodeId) -> (&[NodeId], &[f64]) {
        self.out.row(node)
    }

    pub(crate) fn in_row(&self, node: NodeId) -> (&[NodeId], &[f64]) {
        self.incoming.as_ref().unwrap_or(&self.out).row(node)
    }

    pub fn weight(&self, from: NodeId, to: NodeId) -> Result<f64> {
        self.neighbors(from)
            .find(|&(v, _)| v == to)
            .map(|(_, w)| w)
            .ok_or_else(|| SearchError::MissingEdge {
                from: self.label(from).to_string(),
                to: self.label(to).to_string(),
            })
    }

    /// Sum of arc weights along `path`; `+inf` for an empty path.
    pub fn path_cost(&self, path: &[NodeId]) -> Result<f64> {
        if path.is_empty() {
            return Ok(f64::INFINITY);
        }
        path.windows(2).try_fold(0.0, |acc, pair| Ok(acc + self.weight(pair[0], pair[1])?))
    }
}
