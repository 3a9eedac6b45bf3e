//! Submission payload produced by the wizard's terminal step
//!
//! Plain data handed to the studio (and, in production, to the backend's
//! project-creation call). The wizard guarantees the invariants here,
//! notably that `style_ratios` keys exactly the selected styles and sums
//! to 100 whenever two or more styles are mixed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::StyleId;

/// Renovation budget window, in thousands of the display currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl BudgetRange {
    /// Create a budget window
    #[inline]
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the window
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl std::fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}k", self.min, self.max)
    }
}

/// Household pet situation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetPolicy {
    #[default]
    None,
    Dog,
    Cat,
    Other,
}

/// How much storage the household needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageNeed {
    Minimal,
    #[default]
    Normal,
    Ample,
    Hoarder,
}

/// Household composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyInfo {
    /// Total household members
    pub members: u8,
    /// Of which children
    pub children: u8,
    /// Pet situation
    pub pets: PetPolicy,
}

impl Default for FamilyInfo {
    fn default() -> Self {
        Self {
            members: 3,
            children: 1,
            pets: PetPolicy::None,
        }
    }
}

/// Taste and lifestyle preferences collected on the preferences step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Elements the household likes, e.g. "bright", "wood"
    pub likes: Vec<String>,
    /// Elements to avoid, e.g. "dark", "carpet"
    pub dislikes: Vec<String>,
    /// Storage requirement
    pub storage: StorageNeed,
    /// Free-form special requirements
    pub special_requirements: String,
}

/// The finalized wizard output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSubmission {
    /// Project name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Floorplan image source, e.g. an object-store prefix
    pub source_path: String,
    /// Number of source images
    pub image_count: u32,
    /// Selected styles, in selection order
    pub styles: Vec<StyleId>,
    /// Mix ratio per selected style; empty unless 2+ styles are mixed
    pub style_ratios: BTreeMap<StyleId, u8>,
    /// Household composition
    pub family: FamilyInfo,
    /// Taste preferences
    pub preferences: Preferences,
    /// Budget window, if set
    pub budget: Option<BudgetRange>,
}

impl ProjectSubmission {
    /// Whether the submission mixes more than one style
    #[inline]
    #[must_use]
    pub fn is_style_mix(&self) -> bool {
        self.styles.len() > 1
    }
}
