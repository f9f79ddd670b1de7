//! Job-count reconciliation.

use super::load_index::LoadIndex;
use super::types::Batch;
use crate::jobs::JobRange;

/// Forces the number of batches into `jobs`.
///
/// - Too few: empty batches are appended until there are `jobs.min`.
/// - Too many: the last batch is removed and merged into the lightest
///   remaining batch (first one on ties, its items appended after the
///   target's), until there are `jobs.max`.
///
/// Merging may put a heavy item together with other items when
/// `jobs.max` is smaller than the number of heavy items plus one.
///
/// Assumes a validated range.
pub fn reconcile(mut batches: Vec<Batch>, jobs: JobRange) -> Vec<Batch> {
    if batches.len() < jobs.min {
        batches.resize_with(jobs.min, Batch::new);
        return batches;
    }
    if batches.len() <= jobs.max {
        return batches;
    }

    let mut index = LoadIndex::from_batches(&batches);
    while batches.len() > jobs.max {
        let Some(tail) = batches.pop() else {
            break;
        };
        let Some((target, _)) = index.lightest(&batches) else {
            batches.push(tail);
            break;
        };
        batches[target].absorb(tail);
        index.track(target, batches[target].weight);
    }

    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::types::Item;

    fn singletons(weights: &[u64]) -> Vec<Batch> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Batch::singleton(Item::new(format!("i{i}"), w)))
            .collect()
    }

    #[test]
    fn test_pads_to_min() {
        let batches = reconcile(singletons(&[10]), JobRange::new(3, 5));
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].items, vec!["i0"]);
        assert!(batches[1].is_empty());
        assert!(batches[2].is_empty());
        assert_eq!(batches[2].weight, 0);
    }

    #[test]
    fn test_in_range_untouched() {
        let input = singletons(&[4, 2, 9]);
        assert_eq!(reconcile(input.clone(), JobRange::new(1, 3)), input);
    }

    #[test]
    fn test_merges_tail_into_lightest() {
        let batches = reconcile(singletons(&[8, 3, 5, 1]), JobRange::new(1, 3));
        // i3 (1) is popped and merged into i1 (3), the lightest remaining.
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[1].items, vec!["i1", "i3"]);
        assert_eq!(batches[1].weight, 4);
    }

    #[test]
    fn test_merge_down_to_single_batch() {
        let batches = reconcile(singletons(&[1, 2, 3, 4]), JobRange::new(1, 1));
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].weight, 10);
        assert_eq!(batches[0].items, vec!["i0", "i3", "i1", "i2"]);
    }

    #[test]
    fn test_empty_input_padded() {
        let batches = reconcile(Vec::new(), JobRange::new(2, 4));
        assert_eq!(batches, vec![Batch::new(), Batch::new()]);
    }
}
