//! Studio error types

use casa_catalog::CatalogError;
use casa_domain::{ProjectId, StatusTransitionError};
use casa_wizard::WizardError;

/// Main studio error type
///
/// Everything here is recoverable; the studio holds no external
/// resources and performs no I/O.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StudioError {
    /// Wizard rejection (validation, cap, step misuse)
    #[error("wizard: {0}")]
    Wizard(#[from] WizardError),

    /// Catalog lookup failure
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Illegal project-status move
    #[error("status: {0}")]
    Status(#[from] StatusTransitionError),

    /// No project with the given id
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
}

impl StudioError {
    /// Whether the failure came from draft validation
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, StudioError::Wizard(err) if err.is_validation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_wizard_errors() {
        let err = StudioError::from(WizardError::NotAtTerminalStep);
        assert!(err.to_string().starts_with("wizard:"));
        assert!(!err.is_validation());
    }
}
