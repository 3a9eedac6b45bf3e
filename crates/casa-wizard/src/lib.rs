//! Casa wizard
//!
//! The project-creation wizard as one explicit state machine:
//! - Four fixed steps with declarative required fields
//! - Gated forward transitions, free backward transitions
//! - The style toggle with its mix cap and derived ratio map
//! - Terminal-step submission into a [`casa_domain::ProjectSubmission`]
//!
//! The machine performs no I/O; every rejection comes back as a value and
//! leaves the draft unchanged.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod draft;
pub mod error;
pub mod fields;
pub mod step;

// Re-exports for convenience
pub use draft::{WizardDraft, RATIO_TOTAL, STYLE_CAP};
pub use error::WizardError;
pub use fields::{Field, FieldValue};
pub use step::WizardStep;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
