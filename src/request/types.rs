//! Request and option shapes.

use serde::{Deserialize, Serialize};

use crate::jobs::JobCountConfig;
use crate::matrix::DEFAULT_ITEM_WEIGHT;
use crate::packing::BatchConfig;

/// A batch of projects to plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRequest {
    pub projects: Vec<ProjectInput>,
}

/// One project of a request.
///
/// With `items`, the project is planned by weight. With only `count`, it
/// gets an unweighted job count. With neither, it is a weighted project
/// without items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemInput>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// One item of a weighted project. A missing weight means "unknown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
}

/// Flat planning options, as exposed to CLI flags and action inputs.
///
/// Missing fields take the defaults of [`BatchConfig`] and
/// [`JobCountConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    pub max_weight_per_batch: u64,
    pub heavy_threshold: u64,
    pub min_jobs: usize,
    pub max_jobs: usize,
    pub items_per_job: u64,
    /// Weight given to items without one.
    pub default_weight: u64,
}

impl Default for PlanOptions {
    fn default() -> Self {
        let batch = BatchConfig::default();
        let counts = JobCountConfig::default();
        Self {
            max_weight_per_batch: batch.max_weight_per_batch,
            heavy_threshold: batch.heavy_threshold,
            min_jobs: batch.jobs.min,
            max_jobs: batch.jobs.max,
            items_per_job: counts.items_per_job,
            default_weight: DEFAULT_ITEM_WEIGHT,
        }
    }
}

impl PlanOptions {
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig::default()
            .with_max_weight_per_batch(self.max_weight_per_batch)
            .with_heavy_threshold(self.heavy_threshold)
            .with_jobs(self.min_jobs, self.max_jobs)
    }

    pub fn job_count_config(&self) -> JobCountConfig {
        JobCountConfig::default()
            .with_items_per_job(self.items_per_job)
            .with_jobs(self.min_jobs, self.max_jobs)
    }
}
