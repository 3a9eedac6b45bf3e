//! Casa domain model
//!
//! Shared leaf types for the Casa core:
//! - Catalog materials, categories, suppliers
//! - Projects and their processing-status machine
//! - Decoration styles and the wizard's style roster
//! - The submission payload the wizard hands to the studio
//!
//! Nothing here performs I/O; these are the plain records the engines
//! and the presentation shell exchange.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod material;
pub mod project;
pub mod style;
pub mod submission;

// Re-exports for convenience
pub use material::{Category, Material, MaterialId, PriceUnit, Supplier};
pub use project::{
    validate_transition, OutputConfig, Project, ProjectId, ProjectStatus, StatusTransitionError,
};
pub use style::{Style, StyleId};
pub use submission::{
    BudgetRange, FamilyInfo, PetPolicy, Preferences, ProjectSubmission, StorageNeed,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
