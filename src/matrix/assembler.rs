//! Multi-project planning and matrix assembly.

use tracing::info;

use super::provider::WeightProvider;
use super::types::{Matrix, MatrixEntry, ProjectPlan, ProjectSource};
use crate::error::ConfigResult;
use crate::jobs::{job_count, JobCountConfig};
use crate::packing::{BatchConfig, BatchPlanner};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Plans every project with weights from `provider`.
///
/// Output follows the order of `projects`. With the `parallel` feature,
/// projects are planned concurrently.
pub fn plan_projects<P, S>(
    projects: &[S],
    provider: &P,
    config: &BatchConfig,
) -> ConfigResult<Vec<ProjectPlan>>
where
    P: WeightProvider + ?Sized,
    S: AsRef<str> + Sync,
{
    config.validate()?;
    Ok(map_ordered(projects, |project| {
        plan_weighted(project.as_ref(), provider, config)
    }))
}

/// Plans a mix of weighted and counted projects.
///
/// Only the configurations actually needed are validated: `batch` when a
/// weighted source is present, `counts` when a counted one is.
pub fn plan_sources<P>(
    sources: &[ProjectSource],
    provider: &P,
    batch: &BatchConfig,
    counts: &JobCountConfig,
) -> ConfigResult<Vec<ProjectPlan>>
where
    P: WeightProvider + ?Sized,
{
    if sources
        .iter()
        .any(|s| matches!(s, ProjectSource::Weighted { .. }))
    {
        batch.validate()?;
    }
    if sources
        .iter()
        .any(|s| matches!(s, ProjectSource::Counted { .. }))
    {
        counts.validate()?;
    }

    map_ordered(sources, |source| -> ConfigResult<ProjectPlan> {
        match source {
            ProjectSource::Weighted { project } => Ok(plan_weighted(project, provider, batch)),
            ProjectSource::Counted { project, count } => {
                let jobs = job_count(*count, counts)?;
                info!(project = %project, count, jobs, "planned job count");
                Ok(ProjectPlan::Unweighted {
                    project: project.clone(),
                    jobs,
                })
            }
        }
    })
    .into_iter()
    .collect()
}

/// Flattens per-project plans into matrix entries.
///
/// One entry per batch, batches numbered from 1, projects in input order.
/// Unweighted plans produce entries without `weight` and `items`.
pub fn assemble<I>(plans: I) -> Matrix
where
    I: IntoIterator<Item = ProjectPlan>,
{
    let mut include = Vec::new();
    for plan in plans {
        match plan {
            ProjectPlan::Weighted { project, plan } => {
                include.extend(plan.into_iter().enumerate().map(|(i, batch)| MatrixEntry {
                    project: project.clone(),
                    batch: i + 1,
                    weight: Some(batch.weight),
                    items: Some(batch.items),
                }));
            }
            ProjectPlan::Unweighted { project, jobs } => {
                include.extend((1..=jobs).map(|batch| MatrixEntry {
                    project: project.clone(),
                    batch,
                    weight: None,
                    items: None,
                }));
            }
        }
    }
    Matrix { include }
}

fn plan_weighted<P>(project: &str, provider: &P, config: &BatchConfig) -> ProjectPlan
where
    P: WeightProvider + ?Sized,
{
    let items = provider.weights(project);
    let item_count = items.len();
    let plan = BatchPlanner::plan_validated(items, config);
    let stats = plan.stats();
    info!(
        project = %project,
        items = item_count,
        batches = stats.batches,
        total_weight = stats.total_weight,
        spread = stats.spread,
        "planned batches"
    );
    ProjectPlan::Weighted {
        project: project.to_string(),
        plan,
    }
}

#[cfg(feature = "parallel")]
fn map_ordered<T, R, F>(inputs: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    inputs.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_ordered<T, R, F>(inputs: &[T], f: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    inputs.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::matrix::StaticWeights;
    use crate::packing::{Batch, BatchPlan, Item};

    fn provider() -> StaticWeights {
        StaticWeights::new()
            .with_project(
                "api",
                vec![
                    ("a".into(), Some(30)),
                    ("b".into(), Some(25)),
                    ("c".into(), Some(20)),
                    ("d".into(), Some(15)),
                ],
            )
            .with_project("web", vec![("x".into(), Some(5))])
    }

    #[test]
    fn test_assemble_weighted() {
        let plan = BatchPlan::new(vec![
            Batch::singleton(Item::new("a", 4)),
            Batch::new(),
        ]);
        let matrix = assemble(vec![ProjectPlan::Weighted {
            project: "api".into(),
            plan,
        }]);

        assert_eq!(matrix.len(), 2);
        assert_eq!(
            matrix.include[0],
            MatrixEntry {
                project: "api".into(),
                batch: 1,
                weight: Some(4),
                items: Some(vec!["a".into()]),
            }
        );
        assert_eq!(matrix.include[1].batch, 2);
        assert_eq!(matrix.include[1].weight, Some(0));
        assert_eq!(matrix.include[1].items, Some(Vec::new()));
    }

    #[test]
    fn test_assemble_unweighted() {
        let matrix = assemble(vec![ProjectPlan::Unweighted {
            project: "web".into(),
            jobs: 3,
        }]);

        let batches: Vec<usize> = matrix.iter().map(|e| e.batch).collect();
        assert_eq!(batches, vec![1, 2, 3]);
        assert!(matrix.iter().all(|e| e.weight.is_none() && e.items.is_none()));
    }

    #[test]
    fn test_assemble_preserves_project_order() {
        let matrix = assemble(vec![
            ProjectPlan::Unweighted {
                project: "z".into(),
                jobs: 2,
            },
            ProjectPlan::Unweighted {
                project: "a".into(),
                jobs: 1,
            },
        ]);
        let projects: Vec<&str> = matrix.iter().map(|e| e.project.as_str()).collect();
        assert_eq!(projects, vec!["z", "z", "a"]);
    }

    #[test]
    fn test_plan_projects_in_input_order() {
        let config = BatchConfig::default().with_max_weight_per_batch(50);
        let plans = plan_projects(&["web", "api", "missing"], &provider(), &config).unwrap();

        let names: Vec<&str> = plans.iter().map(ProjectPlan::project).collect();
        assert_eq!(names, vec!["web", "api", "missing"]);
        assert_eq!(plans[0].jobs(), 1);
        assert_eq!(plans[1].jobs(), 2);
        // No items still yields min_jobs empty batches.
        assert_eq!(plans[2].jobs(), 1);
    }

    #[test]
    fn test_plan_projects_invalid_config() {
        let config = BatchConfig::default().with_jobs(3, 1);
        assert_eq!(
            plan_projects(&["api"], &provider(), &config),
            Err(ConfigError::JobRange { min: 3, max: 1 })
        );
    }

    #[test]
    fn test_plan_projects_extreme_weights() {
        let provider = StaticWeights::new().with_project(
            "p",
            vec![("a".into(), Some(u64::MAX)), ("b".into(), Some(1))],
        );
        let config = BatchConfig::default().with_max_weight_per_batch(1);
        let plans = plan_projects(&["p"], &provider, &config).unwrap();

        let ProjectPlan::Weighted { plan, .. } = &plans[0] else {
            panic!("expected a weighted plan");
        };
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.batches[0].weight, u64::MAX);
        assert_eq!(plan.batches[1].weight, 1);
        assert_eq!(plan.total_weight(), u64::MAX);
    }

    #[test]
    fn test_plan_sources_mixed() {
        let sources = vec![
            ProjectSource::counted("legacy", 101),
            ProjectSource::weighted("api"),
        ];
        let plans = plan_sources(
            &sources,
            &provider(),
            &BatchConfig::default(),
            &JobCountConfig::default(),
        )
        .unwrap();

        assert_eq!(
            plans[0],
            ProjectPlan::Unweighted {
                project: "legacy".into(),
                jobs: 3,
            }
        );
        assert_eq!(plans[1].project(), "api");

        let matrix = assemble(plans);
        assert_eq!(matrix.len(), 5);
        assert_eq!(matrix.project("api").count(), 2);
    }

    #[test]
    fn test_plan_sources_only_validates_used_config() {
        let sources = vec![ProjectSource::counted("legacy", 10)];
        let broken_batch = BatchConfig::default().with_max_weight_per_batch(0);
        assert!(plan_sources(
            &sources,
            &provider(),
            &broken_batch,
            &JobCountConfig::default()
        )
        .is_ok());

        let broken_counts = JobCountConfig::default().with_items_per_job(0);
        assert_eq!(
            plan_sources(&sources, &provider(), &BatchConfig::default(), &broken_counts),
            Err(ConfigError::ItemsPerJob(0))
        );
    }
}
