//! Project records and the processing status machine
//!
//! A project is what the wizard's submission becomes. Its status only
//! moves along the validated transition table below; everything else on
//! the record is plain data for the shell to render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::style::StyleId;
use crate::submission::BudgetRange;

/// Unique project identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    /// Generate new project ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Processing status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl ProjectStatus {
    /// Legal moves out of this status
    ///
    /// Failed projects may be retried; Completed is terminal.
    #[must_use]
    pub fn allowed_transitions(self) -> Vec<ProjectStatus> {
        use ProjectStatus::*;
        match self {
            Pending => vec![Processing],
            Processing => vec![Completed, Failed],
            Failed => vec![Processing],
            Completed => vec![],
        }
    }

    /// Whether no further moves exist
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Processing => "processing",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Rejected project-status move
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal status transition: {from} -> {to}")]
pub struct StatusTransitionError {
    /// Status the project was in
    pub from: ProjectStatus,
    /// Status that was requested
    pub to: ProjectStatus,
}

/// Validate a status move against the transition table
pub fn validate_transition(
    from: ProjectStatus,
    to: ProjectStatus,
) -> Result<(), StatusTransitionError> {
    if from.allowed_transitions().contains(&to) {
        Ok(())
    } else {
        Err(StatusTransitionError { from, to })
    }
}

/// Which deliverables processing should produce for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Rendered stills
    pub renders: bool,
    /// Walkable 3D tour
    pub tour_3d: bool,
    /// CAD drawings
    pub cad: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            renders: true,
            tour_3d: true,
            cad: true,
        }
    }
}

/// A design project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,
    /// Project name, e.g. a unit address
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Processing status
    pub status: ProjectStatus,
    /// Number of source floorplan images
    pub image_count: u32,
    /// Processing progress, 0.0..=100.0
    pub progress: f32,
    /// Styles chosen for the project
    pub styles: Vec<StyleId>,
    /// Renovation budget
    pub budget: Option<BudgetRange>,
    /// Requested deliverables
    pub outputs: OutputConfig,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a pending project
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: String::new(),
            status: ProjectStatus::Pending,
            image_count: 0,
            progress: 0.0,
            styles: Vec::new(),
            budget: None,
            outputs: OutputConfig::default(),
            created_at: Utc::now(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With source image count
    #[inline]
    #[must_use]
    pub fn with_image_count(mut self, count: u32) -> Self {
        self.image_count = count;
        self
    }

    /// With style tags
    #[must_use]
    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StyleId>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    /// With budget range
    #[inline]
    #[must_use]
    pub fn with_budget(mut self, budget: BudgetRange) -> Self {
        self.budget = Some(budget);
        self
    }

    /// With requested deliverables
    #[inline]
    #[must_use]
    pub fn with_outputs(mut self, outputs: OutputConfig) -> Self {
        self.outputs = outputs;
        self
    }

    /// Move to a new status, enforcing the transition table
    pub fn transition_to(&mut self, to: ProjectStatus) -> Result<(), StatusTransitionError> {
        validate_transition(self.status, to)?;
        self.status = to;
        if to == ProjectStatus::Completed {
            self.progress = 100.0;
        }
        Ok(())
    }
}
