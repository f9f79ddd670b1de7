//! Weight providers.

use std::collections::HashMap;

use crate::packing::Item;

/// Weight assigned to an item whose cost could not be determined.
pub const DEFAULT_ITEM_WEIGHT: u64 = 1;

/// Supplies the ordered, weighted items of a project.
///
/// Implementations own discovery and cost estimation. When an item's cost
/// cannot be determined, return it with a conservative default weight rather
/// than dropping it, so batching and execution see the same item set.
///
/// Any `Fn(&str) -> Vec<Item>` closure is a provider:
///
/// ```
/// use u_shard::matrix::WeightProvider;
/// use u_shard::packing::Item;
///
/// let provider = |project: &str| vec![Item::new(format!("{project}/a.test.ts"), 3)];
/// assert_eq!(provider.weights("web")[0].id, "web/a.test.ts");
/// ```
pub trait WeightProvider: Send + Sync {
    /// Returns the items of `project` in a stable order.
    fn weights(&self, project: &str) -> Vec<Item>;
}

impl<F> WeightProvider for F
where
    F: Fn(&str) -> Vec<Item> + Send + Sync,
{
    fn weights(&self, project: &str) -> Vec<Item> {
        self(project)
    }
}

/// An in-memory provider over pre-collected weights.
///
/// Items recorded without a weight get the provider's default weight.
/// Unknown projects have no items.
///
/// # Examples
///
/// ```
/// use u_shard::matrix::{StaticWeights, WeightProvider};
///
/// let provider = StaticWeights::new()
///     .with_default_weight(2)
///     .with_project("api", vec![("a.rs".into(), Some(7)), ("b.rs".into(), None)]);
///
/// let items = provider.weights("api");
/// assert_eq!(items[0].weight, 7);
/// assert_eq!(items[1].weight, 2);
/// assert!(provider.weights("web").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct StaticWeights {
    projects: HashMap<String, Vec<(String, Option<u64>)>>,
    default_weight: u64,
}

impl Default for StaticWeights {
    fn default() -> Self {
        Self {
            projects: HashMap::new(),
            default_weight: DEFAULT_ITEM_WEIGHT,
        }
    }
}

impl StaticWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weight used for items recorded without one.
    pub fn with_default_weight(mut self, weight: u64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Records the items of `project`, replacing any previous record.
    pub fn with_project(
        mut self,
        project: impl Into<String>,
        items: Vec<(String, Option<u64>)>,
    ) -> Self {
        self.insert(project, items);
        self
    }

    pub fn insert(&mut self, project: impl Into<String>, items: Vec<(String, Option<u64>)>) {
        self.projects.insert(project.into(), items);
    }

    pub fn default_weight(&self) -> u64 {
        self.default_weight
    }

    pub fn contains(&self, project: &str) -> bool {
        self.projects.contains_key(project)
    }
}

impl WeightProvider for StaticWeights {
    fn weights(&self, project: &str) -> Vec<Item> {
        self.projects
            .get(project)
            .map(|items| {
                items
                    .iter()
                    .map(|(id, weight)| {
                        Item::new(id.clone(), weight.unwrap_or(self.default_weight))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
