//! Serializable planning requests.
//!
//! The boundary between raw inputs (a JSON document, action inputs) and the
//! planners. A [`MatrixRequest`] lists projects with either per-item weights
//! or a plain item count; [`PlanOptions`] carries the flat option set.
//! [`MatrixRequest::plan`] validates both and produces the [`Matrix`].
//!
//! Validation here covers what the planners assume: unique non-empty ids
//! that stay inside the project, sane project names, per-project weight
//! totals that fit in a `u64`, and a job ceiling of [`MAX_JOBS_CEILING`].

mod types;
mod validate;

pub use types::{ItemInput, MatrixRequest, PlanOptions, ProjectInput};
pub use validate::{InputError, MAX_JOBS_CEILING, MAX_PROJECT_NAME_LEN};

use crate::matrix::{assemble, plan_sources, Matrix, ProjectSource, StaticWeights};

impl MatrixRequest {
    /// Checks the request and options without planning.
    pub fn validate(&self, options: &PlanOptions) -> Result<(), InputError> {
        validate::validate_options(options)?;
        validate::validate_projects(self, options.default_weight)
    }

    /// Validates, plans every project and assembles the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_shard::request::{ItemInput, MatrixRequest, PlanOptions, ProjectInput};
    ///
    /// let request = MatrixRequest {
    ///     projects: vec![ProjectInput {
    ///         name: "api".into(),
    ///         items: Some(vec![
    ///             ItemInput { id: "a.rs".into(), weight: Some(30) },
    ///             ItemInput { id: "b.rs".into(), weight: Some(25) },
    ///         ]),
    ///         count: None,
    ///     }],
    /// };
    ///
    /// let matrix = request.plan(&PlanOptions::default()).unwrap();
    /// assert_eq!(matrix.len(), 2);
    /// ```
    pub fn plan(&self, options: &PlanOptions) -> Result<Matrix, InputError> {
        self.validate(options)?;

        let provider = self.weights(options.default_weight);
        let sources = self.sources();
        let plans = plan_sources(
            &sources,
            &provider,
            &options.batch_config(),
            &options.job_count_config(),
        )?;
        Ok(assemble(plans))
    }

    /// The weighted projects' items as a provider.
    pub fn weights(&self, default_weight: u64) -> StaticWeights {
        let mut provider = StaticWeights::new().with_default_weight(default_weight);
        for project in &self.projects {
            if let Some(items) = &project.items {
                let items = items
                    .iter()
                    .map(|item| (item.id.clone(), item.weight))
                    .collect();
                provider.insert(project.name.clone(), items);
            }
        }
        provider
    }

    fn sources(&self) -> Vec<ProjectSource> {
        self.projects
            .iter()
            .map(|project| match (&project.items, project.count) {
                (None, Some(count)) => ProjectSource::counted(project.name.clone(), count),
                _ => ProjectSource::weighted(project.name.clone()),
            })
            .collect()
    }
}
