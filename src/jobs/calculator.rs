//! Unweighted job-count calculation.

use super::config::JobCountConfig;
use crate::error::ConfigResult;

/// Computes how many jobs a project with `count` items should fan out to.
///
/// `ceil(count / items_per_job)`, clamped to the configured job range.
/// A project with no items still receives `min` jobs.
///
/// # Examples
///
/// ```
/// use u_shard::jobs::{job_count, JobCountConfig};
///
/// let config = JobCountConfig::default().with_items_per_job(50).with_jobs(1, 10);
/// assert_eq!(job_count(101, &config).unwrap(), 3);
/// assert_eq!(job_count(0, &config).unwrap(), 1);
/// ```
pub fn job_count(count: u64, config: &JobCountConfig) -> ConfigResult<usize> {
    config.validate()?;

    if count == 0 {
        return Ok(config.jobs.min);
    }

    let needed = count.div_ceil(config.items_per_job);
    let needed = usize::try_from(needed).unwrap_or(usize::MAX);
    Ok(config.jobs.clamp(needed))
}
