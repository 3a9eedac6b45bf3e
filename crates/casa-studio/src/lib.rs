//! Casa studio - the orchestration layer
//!
//! The surface the presentation shell talks to:
//! - Wizard drafts in, stored projects out
//! - Project listing, filtering, dashboard statistics
//! - Guarded processing-status moves
//! - Catalog search, alternatives, budget tier plans
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use casa_catalog::InMemoryCatalog;
//! use casa_studio::{DesignStudio, ProjectCriteria};
//! use casa_wizard::Field;
//!
//! let studio = DesignStudio::new(Arc::new(InMemoryCatalog::new()));
//! let mut draft = studio.new_draft();
//! draft.set_field(Field::Name, "Sunlit Garden 3-801");
//! draft.set_field(Field::SourcePath, "s3://floorplans/sunlit-garden/");
//! while !draft.current_step().is_terminal() {
//!     draft.advance()?;
//! }
//! let project = studio.submit_draft(&draft)?;
//! let all = studio.projects(&ProjectCriteria::new());
//! # Ok::<(), casa_studio::StudioError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod projects;
pub mod studio;

// Re-exports for convenience
pub use config::StudioConfig;
pub use error::StudioError;
pub use projects::{ProjectCriteria, ProjectStats};
pub use studio::DesignStudio;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the studio
    pub use crate::{DesignStudio, ProjectCriteria, ProjectStats, StudioConfig, StudioError};
    pub use casa_catalog::{CatalogRepository, FilterCriteria, InMemoryCatalog};
    pub use casa_domain::{Material, Project, ProjectStatus, StyleId};
    pub use casa_wizard::{Field, FieldValue, WizardDraft, WizardStep};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
