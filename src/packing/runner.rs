//! Weighted planning pipeline.
//!
//! [`BatchPlanner`] runs classification → packing → reconciliation for one
//! project's items.

use tracing::{debug, warn};

use super::classify::classify;
use super::config::BatchConfig;
use super::packer::pack;
use super::reconcile::reconcile;
use super::types::{Batch, BatchPlan, Item};
use crate::error::ConfigResult;

/// Plans the batches of a single project.
///
/// # Usage
///
/// ```
/// use u_shard::packing::{BatchConfig, BatchPlanner, Item};
///
/// let items = vec![
///     Item::new("heavy", 30),
///     Item::new("f1", 10),
///     Item::new("f2", 10),
/// ];
/// let config = BatchConfig::default()
///     .with_max_weight_per_batch(25)
///     .with_heavy_threshold(25);
///
/// let plan = BatchPlanner::plan(items, &config).unwrap();
/// assert_eq!(plan.batches[0].items, vec!["heavy"]);
/// assert_eq!(plan.batches[1].items, vec!["f1", "f2"]);
/// ```
pub struct BatchPlanner;

impl BatchPlanner {
    /// Validates `config` and plans `items`.
    ///
    /// The returned plan holds every item exactly once, conserves total
    /// weight, and has between `config.jobs.min` and `config.jobs.max`
    /// batches. Identical input always yields an identical plan.
    pub fn plan(items: Vec<Item>, config: &BatchConfig) -> ConfigResult<BatchPlan> {
        config.validate()?;
        Ok(Self::plan_validated(items, config))
    }

    /// Plans `items` with a configuration the caller already validated.
    pub(crate) fn plan_validated(items: Vec<Item>, config: &BatchConfig) -> BatchPlan {
        if items.is_empty() {
            return BatchPlan::new(vec![Batch::new(); config.jobs.min]);
        }

        let split = classify(items, config.heavy_threshold);
        let heavy_count = split.heavy.len();
        let regular_count = split.regular.len();

        let packed = pack(split.regular, split.heavy, config.max_weight_per_batch);
        let packed_count = packed.len();
        debug!(
            heavy = heavy_count,
            regular = regular_count,
            batches = packed_count,
            "packed items"
        );

        let batches = reconcile(packed, config.jobs);
        if packed_count > batches.len() {
            debug!(
                from = packed_count,
                to = batches.len(),
                "merged batches down to max_jobs"
            );
        }

        let shared = shared_heavy_count(&batches, heavy_count);
        if shared > 0 {
            warn!(
                heavy = heavy_count,
                shared,
                max_weight_per_batch = config.max_weight_per_batch,
                max_jobs = config.jobs.max,
                "heavy items share a batch"
            );
        }

        BatchPlan::new(batches)
    }
}

/// Counts heavy items that no longer sit alone in their batch.
///
/// Heavy items open the first `heavy_count` batches and only leave them when
/// reconciliation pops their batch off the end. A heavy item is therefore
/// alone iff its front batch still exists and holds a single item.
fn shared_heavy_count(batches: &[Batch], heavy_count: usize) -> usize {
    (0..heavy_count)
        .filter(|&i| batches.get(i).is_none_or(|b| b.len() > 1))
        .count()
}
