#[cfg(test)]
#[path = "../../tests/unit/search/frontier_test.rs"]
mod frontier_test;

use crate::search::SearchState;
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A priority collection of search states ordered by ascending f score. States with equal score
/// are taken in insertion order.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: usize,
    max_size: usize,
}

impl Frontier {
    /// Adds a new state and returns the sequence number assigned to it.
    pub fn push(&mut self, state: SearchState) -> usize {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.heap.push(FrontierEntry { f_score: state.f_score(), sequence, state });
        self.max_size = self.max_size.max(self.heap.len());

        sequence
    }

    /// Removes and returns a state with the lowest f score.
    pub fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop().map(|entry| entry.state)
    }

    /// Returns the lowest f score in the frontier.
    pub fn peek_f_score(&self) -> Option<Float> {
        self.heap.peek().map(|entry| entry.f_score)
    }

    /// Returns amount of states in the frontier.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if there are no states left.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the biggest size the frontier had.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns amount of states ever pushed.
    pub fn total_pushed(&self) -> usize {
        self.next_sequence
    }
}

struct FrontierEntry {
    f_score: Float,
    sequence: usize,
    state: SearchState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the lowest score and the earliest sequence must be the greatest
        compare_floats(other.f_score, self.f_score).then_with(|| other.sequence.cmp(&self.sequence))
    }
}
