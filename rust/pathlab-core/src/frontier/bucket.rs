use std::cmp::Ordering;
use std::collections::VecDeque;

use super::{Entry, Frontier};

/// A bucket-based priority queue with O(1) amortized push/pop for small
/// integral priorities.
///
/// Each bucket holds the entries whose priority falls in one `bucket_width`
/// wide range, kept sorted on insertion, so the pop order is exactly the
/// [`Entry::key_cmp`] order of [`HeapFrontier`](super::HeapFrontier):
/// - Primary: priority (ascending)
/// - Secondary: g (ascending)
/// - Tertiary: seq (ascending)
///
/// Priorities below zero share bucket 0; very large priorities share the
/// last bucket. Both stay correctly ordered, just without the speedup.
#[derive(Clone, Debug)]
pub struct BucketFrontier {
    buckets: Vec<VecDeque<Entry>>,
    current_bucket: usize,
    bucket_width: f64,
    min_priority: f64,
    len: usize,
}

const MAX_BUCKETS: usize = 1 << 20;

impl BucketFrontier {
    /// Create a new BucketFrontier with the specified bucket width.
    pub fn new(bucket_width: f64) -> Self {
        Self {
            buckets: Vec::new(),
            current_bucket: 0,
            bucket_width,
            min_priority: f64::INFINITY,
            len: 0,
        }
    }

    fn bucket_index(&self, priority: f64) -> usize {
        if priority <= 0.0 || self.bucket_width <= 0.0 || priority.is_nan() {
            0
        } else {
            let index = (priority / self.bucket_width) as usize;
            index.min(MAX_BUCKETS - 1)
        }
    }

    fn ensure_bucket_capacity(&mut self, index: usize) {
        if index >= self.buckets.len() {
            self.buckets.resize(index + 1, VecDeque::new());
        }
    }
}

impl Default for BucketFrontier {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Frontier for BucketFrontier {
    fn push(&mut self, entry: Entry) {
        let bucket_idx = self.bucket_index(entry.priority);
        self.ensure_bucket_capacity(bucket_idx);

        let bucket = &mut self.buckets[bucket_idx];
        let insert_pos = bucket
            .binary_search_by(|existing| match existing.key_cmp(&entry) {
                // Equal keys go after existing ones.
                Ordering::Equal => Ordering::Less,
                other => other,
            })
            .unwrap_or_else(|pos| pos);
        bucket.insert(insert_pos, entry);

        if entry.priority < self.min_priority || self.len == 0 {
            self.min_priority = entry.priority;
            self.current_bucket = bucket_idx;
        }
        self.len += 1;
    }

    fn pop(&mut self) -> Option<Entry> {
        while self.current_bucket < self.buckets.len() {
            if let Some(entry) = self.buckets[self.current_bucket].pop_front() {
                self.len -= 1;

                if self.len == 0 {
                    self.min_priority = f64::INFINITY;
                    self.current_bucket = 0;
                } else {
                    while self.current_bucket < self.buckets.len()
                        && self.buckets[self.current_bucket].is_empty()
                    {
                        self.current_bucket += 1;
                    }
                    self.min_priority = self
                        .buckets
                        .get(self.current_bucket)
                        .and_then(|b| b.front())
                        .map(|e| e.priority)
                        .unwrap_or(f64::INFINITY);
                }
                return Some(entry);
            }
            self.current_bucket += 1;
        }
        None
    }

    fn peek_priority(&self) -> Option<f64> {
        (self.len > 0).then_some(self.min_priority)
    }

    fn len(&self) -> usize {
        self.len
    }
}
