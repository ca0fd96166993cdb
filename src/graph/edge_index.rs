//! Weight-ordered index over every edge in the network
//!
//! The clustering loop repeatedly asks one question: which surviving edge
//! has the globally smallest weight? This index answers it without scanning
//! adjacency lists. Entries are ordered by ascending weight, and equal
//! weights fall back to insertion order, so removal is deterministic for any
//! input.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::network::VertexId;

/// One entry in the global edge index: an undirected edge keyed for removal
/// in ascending weight order.
#[derive(Debug, Clone, Copy)]
pub struct IndexedEdge {
    pub weight: f64,
    pub a: VertexId,
    pub b: VertexId,
    /// Insertion sequence number, the tie-break for equal weights.
    seq: u64,
}

impl PartialEq for IndexedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for IndexedEdge {}

impl PartialOrd for IndexedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-ordered edge index. Every inserted entry is retained until popped,
/// including entries whose weight collides with an existing one.
#[derive(Debug, Default)]
pub struct EdgeIndex {
    heap: BinaryHeap<Reverse<IndexedEdge>>,
    next_seq: u64,
}

impl EdgeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge keyed by its weight.
    pub fn insert(&mut self, weight: f64, a: VertexId, b: VertexId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(IndexedEdge { weight, a, b, seq }));
    }

    /// Remove and return the minimum-weight entry.
    pub fn pop_min(&mut self) -> Option<IndexedEdge> {
        self.heap.pop().map(|Reverse(edge)| edge)
    }

    /// Inspect the minimum-weight entry without removing it.
    pub fn peek_min(&self) -> Option<&IndexedEdge> {
        self.heap.peek().map(|Reverse(edge)| edge)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use itertools::Itertools;

    #[test]
    fn pops_in_ascending_weight_order() {
        let mut index = EdgeIndex::new();
        for (weight, a, b) in [(52.3, 0, 1), (3.1, 1, 2), (97.0, 0, 2), (14.8, 2, 3)] {
            index.insert(weight, a, b);
        }

        let weights: Vec<f64> = std::iter::from_fn(|| index.pop_min())
            .map(|edge| edge.weight)
            .collect();
        assert_eq!(weights, vec![3.1, 14.8, 52.3, 97.0]);
        assert!(index.is_empty());
    }

    #[test]
    fn equal_weights_are_all_retained() {
        let mut index = EdgeIndex::new();
        index.insert(10.0, 0, 1);
        index.insert(10.0, 2, 3);
        index.insert(10.0, 4, 5);

        assert_eq!(index.len(), 3);
    }

    #[test]
    fn equal_weights_pop_in_insertion_order() {
        let mut index = EdgeIndex::new();
        index.insert(10.0, 4, 5);
        index.insert(10.0, 0, 1);
        index.insert(10.0, 2, 3);

        let pairs: Vec<(VertexId, VertexId)> = std::iter::from_fn(|| index.pop_min())
            .map(|edge| (edge.a, edge.b))
            .collect();
        assert_eq!(pairs, vec![(4, 5), (0, 1), (2, 3)]);
    }

    #[test]
    fn peek_matches_next_pop() {
        let mut index = EdgeIndex::new();
        index.insert(7.5, 0, 1);
        index.insert(2.5, 1, 2);

        let peeked = index.peek_min().map(|edge| (edge.weight, edge.a, edge.b));
        let popped = index.pop_min().map(|edge| (edge.weight, edge.a, edge.b));
        assert_eq!(peeked, popped);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn pop_sequence_never_decreases() {
        let mut index = EdgeIndex::new();
        for (i, weight) in [5.0, 1.0, 5.0, 0.0, 3.5, 1.0, 9.9].into_iter().enumerate() {
            index.insert(weight, i as VertexId, (i + 1) as VertexId);
        }

        let weights: Vec<f64> = std::iter::from_fn(|| index.pop_min())
            .map(|edge| edge.weight)
            .collect();
        assert!(weights.iter().tuple_windows().all(|(x, y)| x <= y));
    }
}
