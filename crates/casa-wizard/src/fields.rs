//! Draft fields and their values
//!
//! Field names are a closed enum and values a closed tagged variant per
//! kind, so the renderer (and `submit`) can match exhaustively instead of
//! poking at an untyped bag.

use serde::{Deserialize, Serialize};

use casa_domain::{BudgetRange, PetPolicy, StorageNeed};

use crate::step::WizardStep;

/// Every field the wizard collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Description,
    SourcePath,
    ImageCount,
    FamilyMembers,
    Children,
    Pets,
    Budget,
    Likes,
    Dislikes,
    Storage,
    SpecialRequirements,
}

impl Field {
    /// The step this field is collected on
    #[must_use]
    pub fn step(self) -> WizardStep {
        match self {
            Field::Name | Field::Description | Field::SourcePath | Field::ImageCount => {
                WizardStep::BasicInfo
            }
            Field::FamilyMembers
            | Field::Children
            | Field::Pets
            | Field::Budget
            | Field::Likes
            | Field::Dislikes
            | Field::Storage
            | Field::SpecialRequirements => WizardStep::Preferences,
        }
    }

    /// Stable identifier used in validation reports
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::SourcePath => "source_path",
            Field::ImageCount => "image_count",
            Field::FamilyMembers => "family_members",
            Field::Children => "children",
            Field::Pets => "pets",
            Field::Budget => "budget",
            Field::Likes => "likes",
            Field::Dislikes => "dislikes",
            Field::Storage => "storage",
            Field::SpecialRequirements => "special_requirements",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A field's value, one closed variant per input kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Free text input
    Text(String),
    /// Non-negative counter input
    Count(u32),
    /// Range slider
    Range(BudgetRange),
    /// Pet radio group
    Pets(PetPolicy),
    /// Storage radio group
    Storage(StorageNeed),
    /// Multi-select tags
    Tags(Vec<String>),
}

impl FieldValue {
    /// Whether the value counts as populated for required-field gating
    ///
    /// Blank text is treated as absent, matching the form's required rule.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Count(_)
            | FieldValue::Range(_)
            | FieldValue::Pets(_)
            | FieldValue::Storage(_) => true,
            FieldValue::Tags(tags) => !tags.is_empty(),
        }
    }

    /// The text, if this is a text value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The count, if this is a counter value
    #[must_use]
    pub fn as_count(&self) -> Option<u32> {
        match self {
            FieldValue::Count(count) => Some(*count),
            _ => None,
        }
    }

    /// The range, if this is a slider value
    #[must_use]
    pub fn as_range(&self) -> Option<BudgetRange> {
        match self {
            FieldValue::Range(range) => Some(*range),
            _ => None,
        }
    }

    /// The tag list, if this is a multi-select value
    #[must_use]
    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            FieldValue::Tags(tags) => Some(tags),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Count(value)
    }
}

impl From<BudgetRange> for FieldValue {
    fn from(value: BudgetRange) -> Self {
        FieldValue::Range(value)
    }
}
