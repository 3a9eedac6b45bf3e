//! Wizard steps
//!
//! The wizard is a fixed linear sequence; the enum makes out-of-range
//! step indices unrepresentable. Each step declares its own required
//! fields, so validation gating stays a table lookup.

use serde::{Deserialize, Serialize};

use crate::fields::Field;

/// The four wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Project name, description, floorplan source
    BasicInfo,
    /// Style cards and the mix-ratio sliders
    StyleSelection,
    /// Household and taste preferences
    Preferences,
    /// Review and submit (terminal)
    Confirm,
}

impl WizardStep {
    /// All steps, first to last
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::StyleSelection,
        WizardStep::Preferences,
        WizardStep::Confirm,
    ];

    /// Zero-based position in the sequence
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            WizardStep::BasicInfo => 0,
            WizardStep::StyleSelection => 1,
            WizardStep::Preferences => 2,
            WizardStep::Confirm => 3,
        }
    }

    /// The step after this one, if any
    #[inline]
    #[must_use]
    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The step before this one, if any
    #[inline]
    #[must_use]
    pub fn prev(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Whether this is the submission step
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Fields that must be populated before leaving this step
    ///
    /// Only the basics are gated, matching the product's form rules;
    /// tightening a step is a one-line change here.
    #[must_use]
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            WizardStep::BasicInfo => &[Field::Name, Field::SourcePath],
            WizardStep::StyleSelection | WizardStep::Preferences | WizardStep::Confirm => &[],
        }
    }

    /// Display title for the step header
    #[inline]
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic information",
            WizardStep::StyleSelection => "Style selection",
            WizardStep::Preferences => "Needs & preferences",
            WizardStep::Confirm => "Review & submit",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
