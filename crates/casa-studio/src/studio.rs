//! The design studio
//!
//! Owns the project records and an injected catalog repository; the
//! presentation shell calls in here and renders whatever comes back.
//! All operations are synchronous and in-memory; network submission of
//! the produced payloads is the shell's business.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use casa_catalog::{budget, CatalogRepository, CatalogStats, FilterCriteria, TierPlan};
use casa_domain::{Material, MaterialId, Project, ProjectId, ProjectStatus};
use casa_wizard::WizardDraft;

use crate::config::StudioConfig;
use crate::error::StudioError;
use crate::projects::{self, ProjectCriteria, ProjectStats};

/// Orchestrator over projects and the material catalog
pub struct DesignStudio {
    config: StudioConfig,
    catalog: Arc<dyn CatalogRepository>,
    projects: RwLock<Vec<Project>>,
}

impl DesignStudio {
    /// Studio over an injected catalog, default configuration
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self::with_config(catalog, StudioConfig::new())
    }

    /// Studio with explicit configuration
    #[must_use]
    pub fn with_config(catalog: Arc<dyn CatalogRepository>, config: StudioConfig) -> Self {
        Self {
            config,
            catalog,
            projects: RwLock::new(Vec::new()),
        }
    }

    /// The active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> StudioConfig {
        self.config
    }

    /// Fresh wizard draft for a new project
    #[must_use]
    pub fn new_draft(&self) -> WizardDraft {
        WizardDraft::new()
    }

    /// Finalize a draft into a stored project
    ///
    /// Runs the wizard's terminal-step validation; on success the project
    /// enters the store as pending (or processing, when auto-start is
    /// configured) and a copy is returned for the shell to render.
    pub fn submit_draft(&self, draft: &WizardDraft) -> Result<Project, StudioError> {
        let submission = draft.submit()?;

        let mut project = Project::new(submission.name.clone())
            .with_description(submission.description.clone())
            .with_image_count(submission.image_count)
            .with_styles(submission.styles.clone())
            .with_outputs(self.config.outputs);
        if let Some(range) = submission.budget {
            project = project.with_budget(range);
        }
        if self.config.auto_start {
            project.transition_to(ProjectStatus::Processing)?;
        }

        info!(project = %project.id, name = %project.name, "project created");
        let copy = project.clone();
        self.projects.write().push(project);
        Ok(copy)
    }

    /// Projects matching the criteria, in creation order
    #[must_use]
    pub fn projects(&self, criteria: &ProjectCriteria) -> Vec<Project> {
        projects::filter(&self.projects.read(), criteria)
    }

    /// One project by id
    pub fn project(&self, id: ProjectId) -> Result<Project, StudioError> {
        self.projects
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StudioError::ProjectNotFound(id))
    }

    /// Remove a project; returns the removed record
    pub fn remove_project(&self, id: ProjectId) -> Result<Project, StudioError> {
        let mut projects = self.projects.write();
        let pos = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(StudioError::ProjectNotFound(id))?;
        Ok(projects.remove(pos))
    }

    /// Dashboard statistics over the full project list
    #[must_use]
    pub fn project_stats(&self) -> ProjectStats {
        ProjectStats::of(&self.projects.read())
    }

    /// Move a pending (or failed) project into processing
    pub fn start_processing(&self, id: ProjectId) -> Result<(), StudioError> {
        self.with_project_mut(id, |p| {
            p.transition_to(ProjectStatus::Processing)?;
            Ok(())
        })
    }

    /// Mark a processing project completed
    pub fn complete(&self, id: ProjectId) -> Result<(), StudioError> {
        self.with_project_mut(id, |p| {
            p.transition_to(ProjectStatus::Completed)?;
            Ok(())
        })
    }

    /// Mark a processing project failed
    pub fn fail(&self, id: ProjectId) -> Result<(), StudioError> {
        self.with_project_mut(id, |p| {
            p.transition_to(ProjectStatus::Failed)?;
            Ok(())
        })
    }

    /// Report processing progress; clamped to 0..=100
    pub fn update_progress(&self, id: ProjectId, progress: f32) -> Result<f32, StudioError> {
        self.with_project_mut(id, |p| {
            p.progress = progress.clamp(0.0, 100.0);
            Ok(p.progress)
        })
    }

    /// Filter the material catalog
    #[must_use]
    pub fn search_materials(&self, criteria: &FilterCriteria) -> Vec<Material> {
        self.catalog.search(criteria)
    }

    /// Filter the catalog and derive the budget-panel stats in one go
    ///
    /// The stats come from the very sequence returned, so the rendered
    /// count and total can never drift apart.
    #[must_use]
    pub fn search_with_stats(&self, criteria: &FilterCriteria) -> (Vec<Material>, CatalogStats) {
        let matched = self.catalog.search(criteria);
        let stats = CatalogStats::of(&matched);
        debug!(count = stats.count, "material search");
        (matched, stats)
    }

    /// Alternatives for a material
    pub fn alternatives(&self, id: MaterialId) -> Result<Vec<Material>, StudioError> {
        Ok(self.catalog.alternatives(id)?)
    }

    /// Budget plans for the three spending tiers
    #[must_use]
    pub fn budget_plan(&self, total_budget: f64, area_sqm: f64) -> Option<Vec<TierPlan>> {
        budget::plan(total_budget, area_sqm)
    }

    fn with_project_mut<R>(
        &self,
        id: ProjectId,
        f: impl FnOnce(&mut Project) -> Result<R, StudioError>,
    ) -> Result<R, StudioError> {
        let mut projects = self.projects.write();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StudioError::ProjectNotFound(id))?;
        f(project)
    }
}
