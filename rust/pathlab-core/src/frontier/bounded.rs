use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::graph::NodeId;

/// A partial path competing for a slot in a [`BoundedFrontier`].
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub f: f64,
    pub g: f64,
    pub node: NodeId,
    /// Root-to-`node` path, `node` included.
    pub path: Vec<NodeId>,
}

impl Candidate {
    pub fn on_path(&self, node: NodeId) -> bool {
        self.path.contains(&node)
    }
}

/// Memory-bounded open list.
///
/// Candidates are kept sorted by `f`; equal `f` keeps insertion order, so
/// `pop` returns the oldest of the cheapest and `evict_overflow` drops the
/// newest of the most expensive. Entries beyond the limit are only removed
/// by an explicit `evict_overflow`, which lets a whole batch of successors
/// compete before anything is discarded.
#[derive(Clone, Debug)]
pub struct BoundedFrontier {
    entries: VecDeque<Candidate>,
    limit: usize,
}

impl BoundedFrontier {
    pub fn new(limit: usize) -> Self {
        Self { entries: VecDeque::with_capacity(limit + 1), limit }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, candidate: Candidate) {
        let pos = self
            .entries
            .partition_point(|c| c.f.total_cmp(&candidate.f) != Ordering::Greater);
        self.entries.insert(pos, candidate);
    }

    pub fn pop(&mut self) -> Option<Candidate> {
        self.entries.pop_front()
    }

    /// Drops worst entries until the limit holds; returned worst first.
    pub fn evict_overflow(&mut self) -> Vec<Candidate> {
        let mut evicted = Vec::new();
        while self.entries.len() > self.limit {
            match self.entries.pop_back() {
                Some(c) => evicted.push(c),
                None => break,
            }
        }
        evicted
    }
}
