//! Configuration errors shared by every planning entry point.

use thiserror::Error;

/// Rejected planner configuration.
///
/// Every planning entry point validates its configuration first and returns
/// one of these instead of producing a plan. Given a valid configuration the
/// planners are total: they never fail on item data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_weight_per_batch must be at least 1, got {0}")]
    MaxWeightPerBatch(u64),

    #[error("min_jobs must be at least 1, got {0}")]
    MinJobs(usize),

    #[error("max_jobs ({max}) must not be less than min_jobs ({min})")]
    JobRange { min: usize, max: usize },

    #[error("items_per_job must be at least 1, got {0}")]
    ItemsPerJob(u64),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
