//! Job range and unweighted job-count configuration.

use crate::error::{ConfigError, ConfigResult};

/// Inclusive bounds on the number of jobs (batches) emitted per project.
///
/// # Examples
///
/// ```
/// use u_shard::jobs::JobRange;
///
/// let range = JobRange::new(2, 8);
/// assert_eq!(range.clamp(1), 2);
/// assert_eq!(range.clamp(5), 5);
/// assert_eq!(range.clamp(40), 8);
/// assert!(JobRange::new(3, 2).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobRange {
    /// Minimum number of jobs. Shortfalls are padded with empty batches.
    pub min: usize,
    /// Maximum number of jobs. Excess batches are merged down.
    pub max: usize,
}

impl Default for JobRange {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

impl JobRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Clamps `jobs` into `[min, max]`.
    ///
    /// Assumes a validated range.
    pub fn clamp(&self, jobs: usize) -> usize {
        jobs.max(self.min).min(self.max)
    }

    /// Returns `true` if `jobs` lies within the range.
    pub fn contains(&self, jobs: usize) -> bool {
        self.min <= jobs && jobs <= self.max
    }

    /// Validates the range.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min < 1 {
            return Err(ConfigError::MinJobs(self.min));
        }
        if self.max < self.min {
            return Err(ConfigError::JobRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Configuration for the unweighted job-count calculator.
///
/// Used when only a total item count per project is known.
///
/// # Examples
///
/// ```
/// use u_shard::jobs::JobCountConfig;
///
/// let config = JobCountConfig::default()
///     .with_items_per_job(25)
///     .with_jobs(1, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobCountConfig {
    /// How many items a single job is expected to handle.
    pub items_per_job: u64,

    /// Allowed job count.
    pub jobs: JobRange,
}

impl Default for JobCountConfig {
    fn default() -> Self {
        Self {
            items_per_job: 50,
            jobs: JobRange::default(),
        }
    }
}

impl JobCountConfig {
    pub fn with_items_per_job(mut self, n: u64) -> Self {
        self.items_per_job = n;
        self
    }

    pub fn with_jobs(mut self, min: usize, max: usize) -> Self {
        self.jobs = JobRange::new(min, max);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.items_per_job < 1 {
            return Err(ConfigError::ItemsPerJob(self.items_per_job));
        }
        self.jobs.validate()
    }
}
