//! Wizard error types
//!
//! Every failure here is recoverable: the draft is left exactly as it
//! was and the caller surfaces the rejection inline.

use casa_domain::StyleId;

use crate::fields::Field;
use crate::step::WizardStep;

/// Rejected wizard operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// Required fields missing at a step
    #[error("step \"{step}\" is missing required fields: {missing:?}")]
    Validation {
        /// Step the validation ran for
        step: WizardStep,
        /// Fields that are absent or blank
        missing: Vec<Field>,
    },

    /// Style cap reached; the toggle was not applied
    #[error("at most {cap} styles can be mixed")]
    SelectionLimitExceeded {
        /// The fixed selection cap
        cap: usize,
    },

    /// `retreat` called on the first step
    #[error("already at the first step")]
    AtFirstStep,

    /// `advance` called on the terminal step
    #[error("the final step submits instead of advancing")]
    AtTerminalStep,

    /// `submit` called before the terminal step
    #[error("submit is only available on the final step")]
    NotAtTerminalStep,

    /// Ratio override keyed by something other than the current selection
    #[error("ratio keys must be exactly the selected styles")]
    RatioKeysMismatch {
        /// Keys that were provided
        provided: Vec<StyleId>,
    },

    /// Ratio override does not sum to the full 100
    #[error("style ratios must sum to 100, got {sum}")]
    RatioSumMismatch {
        /// The rejected sum
        sum: u32,
    },
}

impl WizardError {
    /// Whether this is a validation (missing fields) rejection
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, WizardError::Validation { .. })
    }
}
