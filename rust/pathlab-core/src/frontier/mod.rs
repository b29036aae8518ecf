//! Queue disciplines for the open set.
//!
//! Every best-first strategy pops the entry with the smallest `priority`;
//! ties fall back to the smaller `g` and then to insertion order (`seq`), so
//! a run is fully deterministic regardless of which frontier backs it.

pub mod bounded;
pub mod bucket;
pub mod heap;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

pub use bounded::{BoundedFrontier, Candidate};
pub use bucket::BucketFrontier;
pub use heap::HeapFrontier;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub priority: f64,
    pub g: f64,
    pub seq: u64,
    pub node: NodeId,
}

impl Entry {
    pub fn new(priority: f64, g: f64, seq: u64, node: NodeId) -> Self {
        Self { priority, g, seq, node }
    }

    /// Ascending pop order.
    pub fn key_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.g.total_cmp(&other.g))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

pub trait Frontier {
    fn push(&mut self, entry: Entry);
    fn pop(&mut self) -> Option<Entry>;
    /// Priority of the entry `pop` would return next.
    fn peek_priority(&self) -> Option<f64>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which [`Frontier`] backs the priority-queue strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrontierKind {
    #[default]
    Heap,
    Bucket {
        #[serde(default = "default_bucket_width")]
        width: f64,
    },
}

fn default_bucket_width() -> f64 {
    1.0
}

impl FrontierKind {
    pub fn build(self) -> Box<dyn Frontier> {
        match self {
            FrontierKind::Heap => Box::new(HeapFrontier::new()),
            FrontierKind::Bucket { width } => Box::new(BucketFrontier::new(width)),
        }
    }
}
