//! Job ranges and the unweighted job-count calculator.
//!
//! [`JobRange`] bounds the number of jobs for both planning modes. When no
//! per-item weights are available, [`job_count`] derives a job count from a
//! plain item count instead of packing batches.

mod calculator;
mod config;

pub use calculator::job_count;
pub use config::{JobCountConfig, JobRange};
