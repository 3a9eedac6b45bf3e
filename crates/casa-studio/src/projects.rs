//! Project list filtering and statistics
//!
//! Same engine contract as the material filter: pure, order-preserving,
//! total. Statistics are always derived from the live list.

use serde::{Deserialize, Serialize};

use casa_domain::{Project, ProjectStatus};

/// Project list filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectCriteria {
    /// Case-insensitive substring over name and description; empty = all
    pub query: String,
    /// Exact status; `None` = all
    pub status: Option<ProjectStatus>,
}

impl ProjectCriteria {
    /// Criteria matching every project
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With free-text query
    #[inline]
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// With an exact status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Whether one project passes the criteria
#[must_use]
pub fn matches(project: &Project, criteria: &ProjectCriteria) -> bool {
    let matches_query = criteria.query.is_empty() || {
        let query = criteria.query.to_lowercase();
        project.name.to_lowercase().contains(&query)
            || project.description.to_lowercase().contains(&query)
    };
    let matches_status = criteria.status.map_or(true, |s| project.status == s);
    matches_query && matches_status
}

/// Filter a project list against the criteria
#[must_use]
pub fn filter(projects: &[Project], criteria: &ProjectCriteria) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect()
}

/// Dashboard statistics over a project list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectStats {
    /// All projects
    pub total: usize,
    /// Awaiting processing
    pub pending: usize,
    /// Currently processing
    pub processing: usize,
    /// Finished
    pub completed: usize,
    /// Failed
    pub failed: usize,
    /// Source images across all projects
    pub total_images: u64,
}

impl ProjectStats {
    /// Compute stats from a project list
    #[must_use]
    pub fn of(projects: &[Project]) -> Self {
        let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
        Self {
            total: projects.len(),
            pending: count(ProjectStatus::Pending),
            processing: count(ProjectStatus::Processing),
            completed: count(ProjectStatus::Completed),
            failed: count(ProjectStatus::Failed),
            total_images: projects.iter().map(|p| u64::from(p.image_count)).sum(),
        }
    }
}
