//! Weighted batch planning for CI fan-out.
//!
//! Splits each project's work items (typically test files with an estimated
//! cost) into a bounded number of balanced batches, one per parallel CI job:
//!
//! - **Packing**: heavy-item isolation, largest-first greedy bin packing
//!   into the lightest batch, and reconciliation of the batch count into a
//!   `[min, max]` job range.
//! - **Jobs**: job ranges and the unweighted job-count calculator used when
//!   only a total item count is known.
//! - **Matrix**: weight providers, multi-project planning and assembly of
//!   the flat matrix a CI orchestrator fans out.
//! - **Request** (`serde` feature): validated JSON-facing requests.
//!
//! # Architecture
//!
//! Planning is pure and deterministic: no I/O, no global state, and ties
//! are always broken by input order. Discovering items and estimating their
//! weights is left to a [`matrix::WeightProvider`]. Projects are independent
//! and, with the `parallel` feature, planned concurrently.
//!
//! # Example
//!
//! ```
//! use u_shard::matrix::{assemble, plan_projects, StaticWeights};
//! use u_shard::packing::BatchConfig;
//!
//! let provider = StaticWeights::new().with_project(
//!     "api",
//!     vec![
//!         ("a.test.ts".into(), Some(30)),
//!         ("b.test.ts".into(), Some(25)),
//!         ("c.test.ts".into(), Some(20)),
//!         ("d.test.ts".into(), Some(15)),
//!     ],
//! );
//! let config = BatchConfig::default().with_max_weight_per_batch(50);
//!
//! let plans = plan_projects(&["api"], &provider, &config).unwrap();
//! let matrix = assemble(plans);
//! assert_eq!(matrix.len(), 2);
//! assert_eq!(matrix.include[0].weight, Some(45));
//! ```

pub mod error;
pub mod jobs;
pub mod matrix;
pub mod packing;

#[cfg(feature = "serde")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ConfigError, ConfigResult};
