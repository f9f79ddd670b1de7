//! Weighted planning configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::jobs::JobRange;

/// Configuration for weighted batch planning.
///
/// # Defaults
///
/// ```
/// use u_shard::packing::BatchConfig;
///
/// let config = BatchConfig::default();
/// assert_eq!(config.max_weight_per_batch, 50);
/// assert_eq!(config.heavy_threshold, 0);
/// assert_eq!((config.jobs.min, config.jobs.max), (1, 10));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_shard::packing::BatchConfig;
///
/// let config = BatchConfig::default()
///     .with_max_weight_per_batch(200)
///     .with_heavy_threshold(150)
///     .with_jobs(2, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Capacity of a batch. An item that would push the lightest batch past
    /// this opens a new batch instead.
    ///
    /// A single item heavier than the capacity still gets a batch of its own.
    pub max_weight_per_batch: u64,

    /// Items with `weight >= heavy_threshold` open a batch of their own.
    ///
    /// Regular items can still join that batch while it stays within
    /// `max_weight_per_batch`. Set to 0 to disable isolation.
    pub heavy_threshold: u64,

    /// Allowed number of batches.
    pub jobs: JobRange,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_weight_per_batch: 50,
            heavy_threshold: 0,
            jobs: JobRange::default(),
        }
    }
}

impl BatchConfig {
    /// Sets the per-batch capacity.
    pub fn with_max_weight_per_batch(mut self, weight: u64) -> Self {
        self.max_weight_per_batch = weight;
        self
    }

    /// Sets the heavy-item isolation threshold (0 disables).
    pub fn with_heavy_threshold(mut self, threshold: u64) -> Self {
        self.heavy_threshold = threshold;
        self
    }

    /// Sets the allowed batch count range.
    pub fn with_jobs(mut self, min: usize, max: usize) -> Self {
        self.jobs = JobRange::new(min, max);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_weight_per_batch < 1 {
            return Err(ConfigError::MaxWeightPerBatch(self.max_weight_per_batch));
        }
        self.jobs.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        assert!(BatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_capacity() {
        let config = BatchConfig::default().with_max_weight_per_batch(0);
        assert_eq!(config.validate(), Err(ConfigError::MaxWeightPerBatch(0)));
    }

    #[test]
    fn test_validate_bad_jobs() {
        let config = BatchConfig::default().with_jobs(0, 5);
        assert_eq!(config.validate(), Err(ConfigError::MinJobs(0)));

        let config = BatchConfig::default().with_jobs(6, 5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::JobRange { min: 6, max: 5 })
        );
    }

    #[test]
    fn test_threshold_zero_is_valid() {
        let config = BatchConfig::default().with_heavy_threshold(0);
        assert!(config.validate().is_ok());
    }
}
