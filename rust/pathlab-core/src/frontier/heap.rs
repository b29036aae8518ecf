use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{Entry, Frontier};

#[derive(Clone, Copy, Debug)]
struct MinEntry(Entry);

impl PartialEq for MinEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for MinEntry {}
impl PartialOrd for MinEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for MinEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert ordering for min-heap behavior
        other.0.key_cmp(&self.0)
    }
}

/// Binary min-heap frontier with lazy deletion left to the caller.
#[derive(Clone, Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<MinEntry>,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for HeapFrontier {
    fn push(&mut self, entry: Entry) {
        self.heap.push(MinEntry(entry));
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|e| e.0)
    }

    fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.0.priority)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    #[test]
    fn pops_by_priority_then_g_then_seq() {
        let mut q = HeapFrontier::new();
        q.push(Entry::new(5.0, 3.0, 0, NodeId(1)));
        q.push(Entry::new(5.0, 1.0, 1, NodeId(2)));
        q.push(Entry::new(2.0, 9.0, 2, NodeId(3)));
        q.push(Entry::new(5.0, 1.0, 3, NodeId(4)));
        assert_eq!(q.peek_priority(), Some(2.0));
        let order: Vec<u32> = std::iter::from_fn(|| q.pop()).map(|e| e.node.0).collect();
        assert_eq!(order, vec![3, 2, 4, 1]);
        assert!(q.is_empty());
        assert_eq!(q.peek_priority(), None);
    }
}
