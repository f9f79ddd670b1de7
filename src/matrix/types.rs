//! Matrix records and per-project plans.

use crate::packing::BatchPlan;

/// One output record: a project paired with one of its batches.
///
/// `weight` and `items` are only present for weighted plans.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixEntry {
    pub project: String,

    /// 1-based batch number within the project.
    pub batch: usize,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub weight: Option<u64>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub items: Option<Vec<String>>,
}

/// The full fan-out matrix, in the `{"include": [...]}` shape CI matrix
/// strategies consume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    pub include: Vec<MatrixEntry>,
}

impl Matrix {
    /// Number of entries, i.e. parallel jobs across all projects.
    pub fn len(&self) -> usize {
        self.include.len()
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatrixEntry> {
        self.include.iter()
    }

    /// Entries belonging to `project`, in batch order.
    pub fn project<'a>(&'a self, project: &'a str) -> impl Iterator<Item = &'a MatrixEntry> + 'a {
        self.include.iter().filter(move |e| e.project == project)
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a MatrixEntry;
    type IntoIter = std::slice::Iter<'a, MatrixEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.include.iter()
    }
}

/// The planning result for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectPlan {
    /// Batches planned from per-item weights.
    Weighted { project: String, plan: BatchPlan },

    /// A job count derived from a plain item count.
    Unweighted { project: String, jobs: usize },
}

impl ProjectPlan {
    pub fn project(&self) -> &str {
        match self {
            ProjectPlan::Weighted { project, .. } | ProjectPlan::Unweighted { project, .. } => {
                project
            }
        }
    }

    /// Number of jobs this project fans out to.
    pub fn jobs(&self) -> usize {
        match self {
            ProjectPlan::Weighted { plan, .. } => plan.len(),
            ProjectPlan::Unweighted { jobs, .. } => *jobs,
        }
    }
}

/// Where a project's planning input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    /// Items and weights are fetched from the weight provider.
    Weighted { project: String },

    /// Only the total item count is known.
    Counted { project: String, count: u64 },
}

impl ProjectSource {
    pub fn weighted(project: impl Into<String>) -> Self {
        ProjectSource::Weighted {
            project: project.into(),
        }
    }

    pub fn counted(project: impl Into<String>, count: u64) -> Self {
        ProjectSource::Counted {
            project: project.into(),
            count,
        }
    }
}
