//! Lightest-batch lookup.
//!
//! A min-heap of `(weight, position)` entries over a batch sequence. Ordering
//! by position second makes the lookup return the first batch among equally
//! light ones, the same answer as a left-to-right scan.
//!
//! `BinaryHeap` cannot update entries in place, so a weight change pushes a
//! fresh entry and leaves the old one behind. Stale entries (weight no longer
//! matches, or position past the end of the sequence) are discarded lazily
//! when they reach the top.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::types::Batch;

#[derive(Debug, Default)]
pub(crate) struct LoadIndex {
    heap: BinaryHeap<Reverse<(u64, usize)>>,
}

impl LoadIndex {
    /// Indexes every batch in `batches`.
    pub(crate) fn from_batches(batches: &[Batch]) -> Self {
        let heap = batches
            .iter()
            .enumerate()
            .map(|(position, batch)| Reverse((batch.weight, position)))
            .collect();
        Self { heap }
    }

    /// Records the current weight of the batch at `position`.
    pub(crate) fn track(&mut self, position: usize, weight: u64) {
        self.heap.push(Reverse((weight, position)));
    }

    /// Returns `(position, weight)` of the lightest tracked batch.
    ///
    /// Batches must only grow heavier or be removed from the end of the
    /// sequence between calls.
    pub(crate) fn lightest(&mut self, batches: &[Batch]) -> Option<(usize, u64)> {
        while let Some(&Reverse((weight, position))) = self.heap.peek() {
            match batches.get(position) {
                Some(batch) if batch.weight == weight => return Some((position, weight)),
                _ => {
                    self.heap.pop();
                }
            }
        }
        None
    }
}
