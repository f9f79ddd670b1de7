//! Weighted batch planning.
//!
//! Splits a project's weighted items into balanced batches in three steps:
//!
//! 1. **Classification**: items at or above the heavy threshold each open
//!    a batch of their own ([`classify`]).
//! 2. **Packing**: the remaining items are assigned heaviest first to the
//!    lightest batch that stays within capacity, heavy batches included,
//!    opening new batches when none fits ([`pack`]).
//! 3. **Reconciliation**: the batch count is padded with empty batches or
//!    merged down so it lies within the configured job range
//!    ([`reconcile`]).
//!
//! [`BatchPlanner`] runs the whole pipeline.
//!
//! # Guarantees
//!
//! - Total weight is conserved and every item lands in exactly one batch.
//! - The batch count always lies within the job range, also for no items.
//! - Ties are broken by input order, so output is reproducible.
//! - Heavy isolation is best-effort: a heavy item below the capacity can
//!   take regular items, and merging down to `max` jobs can combine a heavy
//!   item with others.
//!
//! # References
//!
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies" (LPT rule)

mod classify;
mod config;
mod load_index;
mod packer;
mod reconcile;
mod runner;
mod types;

pub use classify::{classify, Classification};
pub use config::BatchConfig;
pub use packer::pack;
pub use reconcile::reconcile;
pub use runner::BatchPlanner;
pub use types::{Batch, BatchPlan, Item, PlanStats};
