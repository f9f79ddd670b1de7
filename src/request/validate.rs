//! Caller-side request validation.

use std::collections::HashSet;

use thiserror::Error;

use super::types::{MatrixRequest, PlanOptions, ProjectInput};
use crate::error::ConfigError;

/// Hard ceiling on jobs per project.
pub const MAX_JOBS_CEILING: usize = 100;

/// Maximum project name length in characters.
pub const MAX_PROJECT_NAME_LEN: usize = 255;

/// A request or option set the planners must not see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("project name exceeds {limit} characters: {name}")]
    ProjectNameTooLong { name: String, limit: usize },

    #[error("duplicate project: {0}")]
    DuplicateProject(String),

    #[error("project {0} has both items and count")]
    AmbiguousProject(String),

    #[error("project {project}: item id must not be empty")]
    EmptyItemId { project: String },

    #[error("project {project}: duplicate item id {id}")]
    DuplicateItem { project: String, id: String },

    #[error("project {project}: item id escapes the project root: {id}")]
    PathTraversal { project: String, id: String },

    #[error("project {0}: total item weight exceeds u64::MAX")]
    WeightOverflow(String),

    #[error("max_jobs {max_jobs} exceeds the ceiling of {ceiling}")]
    JobCeiling { max_jobs: usize, ceiling: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Validates the options that apply to every project.
pub(crate) fn validate_options(options: &PlanOptions) -> Result<(), InputError> {
    options.batch_config().validate()?;
    options.job_count_config().validate()?;
    if options.max_jobs > MAX_JOBS_CEILING {
        return Err(InputError::JobCeiling {
            max_jobs: options.max_jobs,
            ceiling: MAX_JOBS_CEILING,
        });
    }
    Ok(())
}

/// Validates project names, item ids and weight totals.
///
/// `default_weight` stands in for missing item weights.
pub(crate) fn validate_projects(
    request: &MatrixRequest,
    default_weight: u64,
) -> Result<(), InputError> {
    let mut seen = HashSet::new();
    for project in &request.projects {
        validate_name(&project.name)?;
        if !seen.insert(project.name.as_str()) {
            return Err(InputError::DuplicateProject(project.name.clone()));
        }
        validate_items(project, default_weight)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), InputError> {
    if name.trim().is_empty() {
        return Err(InputError::EmptyProjectName);
    }
    if name.chars().count() > MAX_PROJECT_NAME_LEN {
        return Err(InputError::ProjectNameTooLong {
            name: name.to_string(),
            limit: MAX_PROJECT_NAME_LEN,
        });
    }
    Ok(())
}

fn validate_items(project: &ProjectInput, default_weight: u64) -> Result<(), InputError> {
    let Some(items) = &project.items else {
        return Ok(());
    };
    if project.count.is_some() {
        return Err(InputError::AmbiguousProject(project.name.clone()));
    }

    let mut seen = HashSet::with_capacity(items.len());
    let mut total: u64 = 0;
    for item in items {
        if item.id.is_empty() {
            return Err(InputError::EmptyItemId {
                project: project.name.clone(),
            });
        }
        if escapes_root(&item.id) {
            return Err(InputError::PathTraversal {
                project: project.name.clone(),
                id: item.id.clone(),
            });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(InputError::DuplicateItem {
                project: project.name.clone(),
                id: item.id.clone(),
            });
        }
        total = total
            .checked_add(item.weight.unwrap_or(default_weight))
            .ok_or_else(|| InputError::WeightOverflow(project.name.clone()))?;
    }
    Ok(())
}

/// Absolute paths and `..` segments point outside the project.
fn escapes_root(id: &str) -> bool {
    id.starts_with('/')
        || id.starts_with('\\')
        || id.split(['/', '\\']).any(|segment| segment == "..")
}
