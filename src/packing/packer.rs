//! Greedy largest-first bin packing.

use super::load_index::LoadIndex;
use super::types::{Batch, Item};

/// Packs items into batches.
///
/// 1. Every heavy item gets a singleton batch, in input order, at the front.
/// 2. Regular items are taken heaviest first (stable: equal weights keep
///    input order).
/// 3. Each item joins the lightest batch (first one on ties) if that keeps
///    it within `max_weight_per_batch`; otherwise it opens a new batch at the
///    end.
///
/// Heavy batches take part in the lightest-batch search, so a heavy item
/// below the capacity can share its batch with regular items. A threshold
/// above `max_weight_per_batch` keeps every heavy item alone. No item is
/// dropped; an item heavier than the capacity simply ends up alone.
///
/// # Examples
///
/// ```
/// use u_shard::packing::{pack, Item};
///
/// let regular = vec![
///     Item::new("a", 30),
///     Item::new("b", 25),
///     Item::new("c", 20),
///     Item::new("d", 15),
/// ];
/// let batches = pack(regular, Vec::new(), 50);
///
/// assert_eq!(batches.len(), 2);
/// assert_eq!(batches[0].items, vec!["a", "d"]);
/// assert_eq!(batches[1].items, vec!["b", "c"]);
/// ```
pub fn pack(regular: Vec<Item>, heavy: Vec<Item>, max_weight_per_batch: u64) -> Vec<Batch> {
    let mut batches: Vec<Batch> = heavy.into_iter().map(Batch::singleton).collect();
    let mut index = LoadIndex::from_batches(&batches);

    let mut regular = regular;
    regular.sort_by(|a, b| b.weight.cmp(&a.weight));

    for item in regular {
        match index.lightest(&batches) {
            Some((position, weight))
                if weight.saturating_add(item.weight) <= max_weight_per_batch =>
            {
                batches[position].push(item);
                index.track(position, batches[position].weight);
            }
            _ => {
                index.track(batches.len(), item.weight);
                batches.push(Batch::singleton(item));
            }
        }
    }

    batches
}
