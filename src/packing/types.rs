//! Items, batches and batch plans.

/// A unit of work carrying an integer execution-cost weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Identifier, unique within one planning run (typically a file path).
    pub id: String,
    /// Estimated execution cost.
    pub weight: u64,
}

impl Item {
    pub fn new(id: impl Into<String>, weight: u64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

/// A group of items that run together as one parallel job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Batch {
    /// Sum of the weights of `items`.
    pub weight: u64,
    /// Item ids in insertion order.
    pub items: Vec<String>,
}

impl Batch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch holding only `item`.
    pub fn singleton(item: Item) -> Self {
        Self {
            weight: item.weight,
            items: vec![item.id],
        }
    }

    /// Appends `item` and adds its weight, saturating at `u64::MAX`.
    pub fn push(&mut self, item: Item) {
        self.weight = self.weight.saturating_add(item.weight);
        self.items.push(item.id);
    }

    /// Moves all of `other`'s items after this batch's items.
    pub fn absorb(&mut self, other: Batch) {
        self.weight = self.weight.saturating_add(other.weight);
        self.items.extend(other.items);
    }

    /// Number of items in the batch.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Summary of how evenly a plan spreads weight across its batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanStats {
    pub batches: usize,
    pub total_weight: u64,
    pub max_weight: u64,
    pub min_weight: u64,
    /// `max_weight - min_weight`.
    pub spread: u64,
}

/// The ordered batches planned for one project.
///
/// Batches are numbered from 1 in output; index 0 here is batch 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchPlan {
    pub batches: Vec<Batch>,
}

impl BatchPlan {
    pub fn new(batches: Vec<Batch>) -> Self {
        Self { batches }
    }

    /// Number of batches (jobs).
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Batch> {
        self.batches.iter()
    }

    /// Sum of all batch weights, saturating at `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        self.batches
            .iter()
            .fold(0u64, |total, b| total.saturating_add(b.weight))
    }

    /// Number of items across all batches.
    pub fn item_count(&self) -> usize {
        self.batches.iter().map(Batch::len).sum()
    }

    /// Computes load statistics. All zero for an empty plan.
    pub fn stats(&self) -> PlanStats {
        let max_weight = self.batches.iter().map(|b| b.weight).max().unwrap_or(0);
        let min_weight = self.batches.iter().map(|b| b.weight).min().unwrap_or(0);
        PlanStats {
            batches: self.batches.len(),
            total_weight: self.total_weight(),
            max_weight,
            min_weight,
            spread: max_weight - min_weight,
        }
    }

}

impl IntoIterator for BatchPlan {
    type Item = Batch;
    type IntoIter = std::vec::IntoIter<Batch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.into_iter()
    }
}

impl<'a> IntoIterator for &'a BatchPlan {
    type Item = &'a Batch;
    type IntoIter = std::slice::Iter<'a, Batch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.iter()
    }
}
