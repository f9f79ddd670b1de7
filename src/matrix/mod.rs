//! Fan-out matrix assembly.
//!
//! Turns per-project plans into the flat [`Matrix`] a CI orchestrator fans
//! out: one [`MatrixEntry`] per batch, projects in input order.
//!
//! # Key Components
//!
//! - **Providers**: [`WeightProvider`] supplies a project's weighted items;
//!   [`StaticWeights`] serves pre-collected weights.
//! - **Planning**: [`plan_projects`] (weighted only) and [`plan_sources`]
//!   (weighted and counted projects) produce [`ProjectPlan`]s.
//! - **Assembly**: [`assemble`] flattens plans into a [`Matrix`].
//!
//! Projects share no state, so with the `parallel` feature they are planned
//! concurrently on the rayon pool. Output order does not depend on it.

mod assembler;
mod provider;
mod types;

pub use assembler::{assemble, plan_projects, plan_sources};
pub use provider::{StaticWeights, WeightProvider, DEFAULT_ITEM_WEIGHT};
pub use types::{Matrix, MatrixEntry, ProjectPlan, ProjectSource};
