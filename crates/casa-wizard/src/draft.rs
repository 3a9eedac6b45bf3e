//! The wizard draft
//!
//! One explicit state object: current step, field values, style selection
//! and the derived ratio map. Every operation either applies fully or
//! returns a typed rejection with the draft untouched.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use casa_domain::{
    FamilyInfo, PetPolicy, Preferences, ProjectSubmission, StorageNeed, StyleId,
};

use crate::error::WizardError;
use crate::fields::{Field, FieldValue};
use crate::step::WizardStep;

/// Most styles that can be mixed in one project
pub const STYLE_CAP: usize = 3;

/// Ratio percentages always sum to this
pub const RATIO_TOTAL: u8 = 100;

/// In-progress project draft
///
/// Created at wizard entry, mutated step by step, finalized by `submit`
/// on the terminal step or simply dropped when the user walks away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardDraft {
    step: WizardStep,
    fields: IndexMap<Field, FieldValue>,
    styles: Vec<StyleId>,
    ratios: IndexMap<StyleId, u8>,
}

impl WizardDraft {
    /// Fresh draft at the first step, form defaults applied
    #[must_use]
    pub fn new() -> Self {
        let mut fields = IndexMap::new();
        fields.insert(Field::FamilyMembers, FieldValue::Count(3));
        fields.insert(Field::Children, FieldValue::Count(1));
        fields.insert(Field::Storage, FieldValue::Storage(StorageNeed::Normal));

        Self {
            step: WizardStep::BasicInfo,
            fields,
            styles: Vec::new(),
            ratios: IndexMap::new(),
        }
    }

    /// The step the user is on
    #[inline]
    #[must_use]
    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    /// A field's value, if entered
    #[inline]
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Enter or replace a field value
    ///
    /// Values are accepted as-is; gating happens at `advance`/`submit`.
    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.fields.insert(field, value.into());
    }

    /// Selected styles, in selection order
    #[inline]
    #[must_use]
    pub fn selected_styles(&self) -> &[StyleId] {
        &self.styles
    }

    /// Mix ratios; empty unless two or more styles are selected
    #[inline]
    #[must_use]
    pub fn style_ratios(&self) -> &IndexMap<StyleId, u8> {
        &self.ratios
    }

    /// Required fields of `step` that are absent or blank
    #[must_use]
    pub fn missing_fields(&self, step: WizardStep) -> Vec<Field> {
        step.required_fields()
            .iter()
            .copied()
            .filter(|field| !self.fields.get(field).is_some_and(FieldValue::is_populated))
            .collect()
    }

    /// Check one step's required fields
    pub fn validate_step(&self, step: WizardStep) -> Result<(), WizardError> {
        let missing = self.missing_fields(step);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WizardError::Validation { step, missing })
        }
    }

    /// Move to the next step, gated on the current step's required fields
    ///
    /// Returns the new step. On rejection the index does not move and the
    /// missing fields are reported back for inline display.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let Some(next) = self.step.next() else {
            return Err(WizardError::AtTerminalStep);
        };
        self.validate_step(self.step)?;
        debug!(from = %self.step, to = %next, "wizard advance");
        self.step = next;
        Ok(next)
    }

    /// Move to the previous step
    ///
    /// Never validates and never touches entered data.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        let prev = self.step.prev().ok_or(WizardError::AtFirstStep)?;
        debug!(from = %self.step, to = %prev, "wizard retreat");
        self.step = prev;
        Ok(prev)
    }

    /// Toggle a style card
    ///
    /// Adding is capped at [`STYLE_CAP`]; removal never is. Returns
    /// whether the style is selected afterwards. Any change in selection
    /// size resets the ratio map to an even split (remainder on the first
    /// selection); below two selections the map is cleared.
    pub fn toggle_style(&mut self, style: StyleId) -> Result<bool, WizardError> {
        if let Some(pos) = self.styles.iter().position(|s| *s == style) {
            self.styles.remove(pos);
            self.rebalance_ratios();
            return Ok(false);
        }
        if self.styles.len() >= STYLE_CAP {
            warn!(%style, cap = STYLE_CAP, "style selection cap reached");
            return Err(WizardError::SelectionLimitExceeded { cap: STYLE_CAP });
        }
        self.styles.push(style);
        self.rebalance_ratios();
        Ok(true)
    }

    /// Replace the ratio map wholesale (the sliders' commit path)
    ///
    /// The override must key exactly the current selection and sum to
    /// [`RATIO_TOTAL`]; otherwise it is rejected and the previous ratios
    /// stay in force.
    pub fn set_style_ratios(&mut self, ratios: BTreeMap<StyleId, u8>) -> Result<(), WizardError> {
        let mut provided: Vec<StyleId> = ratios.keys().cloned().collect();
        provided.sort();
        let mut selected: Vec<StyleId> = self.styles.clone();
        selected.sort();
        if provided != selected {
            return Err(WizardError::RatioKeysMismatch { provided });
        }

        let sum: u32 = ratios.values().map(|&v| u32::from(v)).sum();
        if sum != u32::from(RATIO_TOTAL) {
            return Err(WizardError::RatioSumMismatch { sum });
        }

        // Store in selection order.
        self.ratios = self
            .styles
            .iter()
            .map(|s| (s.clone(), ratios[s]))
            .collect();
        Ok(())
    }

    /// Finalize the draft into a submission payload
    ///
    /// Only available on the terminal step. Re-validates every step's
    /// required fields; the rejection names the earliest offending step
    /// and lists every missing field across the whole draft.
    pub fn submit(&self) -> Result<ProjectSubmission, WizardError> {
        if !self.step.is_terminal() {
            return Err(WizardError::NotAtTerminalStep);
        }

        let mut missing = Vec::new();
        for step in WizardStep::ALL {
            missing.extend(self.missing_fields(step));
        }
        if !missing.is_empty() {
            let step = missing[0].step();
            return Err(WizardError::Validation { step, missing });
        }

        let submission = ProjectSubmission {
            name: self.text_field(Field::Name),
            description: self.text_field(Field::Description),
            source_path: self.text_field(Field::SourcePath),
            image_count: self.count_field(Field::ImageCount, 0),
            styles: self.styles.clone(),
            style_ratios: self.ratios.iter().map(|(s, &r)| (s.clone(), r)).collect(),
            family: FamilyInfo {
                members: clamp_u8(self.count_field(Field::FamilyMembers, 3)),
                children: clamp_u8(self.count_field(Field::Children, 0)),
                pets: match self.field(Field::Pets) {
                    Some(FieldValue::Pets(pets)) => *pets,
                    _ => PetPolicy::None,
                },
            },
            preferences: Preferences {
                likes: self.tags_field(Field::Likes),
                dislikes: self.tags_field(Field::Dislikes),
                storage: match self.field(Field::Storage) {
                    Some(FieldValue::Storage(storage)) => *storage,
                    _ => StorageNeed::Normal,
                },
                special_requirements: self.text_field(Field::SpecialRequirements),
            },
            budget: self.field(Field::Budget).and_then(FieldValue::as_range),
        };
        info!(
            name = %submission.name,
            styles = submission.styles.len(),
            "wizard draft submitted"
        );
        Ok(submission)
    }

    /// Even split across the current selection; remainder goes to the
    /// first selected style so the total always lands on [`RATIO_TOTAL`].
    fn rebalance_ratios(&mut self) {
        self.ratios.clear();
        let n = self.styles.len();
        if n < 2 {
            return;
        }
        let share = RATIO_TOTAL / n as u8;
        let remainder = RATIO_TOTAL - share * n as u8;
        for (i, style) in self.styles.iter().enumerate() {
            let extra = if i == 0 { remainder } else { 0 };
            self.ratios.insert(style.clone(), share + extra);
        }
    }

    fn text_field(&self, field: Field) -> String {
        self.field(field)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    fn count_field(&self, field: Field, default: u32) -> u32 {
        self.field(field)
            .and_then(FieldValue::as_count)
            .unwrap_or(default)
    }

    fn tags_field(&self, field: Field) -> Vec<String> {
        self.field(field)
            .and_then(FieldValue::as_tags)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_u8(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft_with_basics() -> WizardDraft {
        let mut draft = WizardDraft::new();
        draft.set_field(Field::Name, "Sunlit Garden 3-801");
        draft.set_field(Field::SourcePath, "s3://floorplans/sunlit-garden/");
        draft
    }

    #[test]
    fn advance_is_gated_on_required_fields() {
        let mut draft = WizardDraft::new();
        let err = draft.advance().unwrap_err();
        assert_eq!(
            err,
            WizardError::Validation {
                step: WizardStep::BasicInfo,
                missing: vec![Field::Name, Field::SourcePath],
            }
        );
        assert_eq!(draft.current_step(), WizardStep::BasicInfo);
    }

    #[test]
    fn advance_moves_exactly_one_step() {
        let mut draft = draft_with_basics();
        assert_eq!(draft.advance().unwrap(), WizardStep::StyleSelection);
        assert_eq!(draft.current_step(), WizardStep::StyleSelection);
    }

    #[test]
    fn retreat_then_advance_restores_index_and_data() {
        let mut draft = draft_with_basics();
        draft.advance().unwrap();
        draft.retreat().unwrap();
        assert_eq!(draft.current_step(), WizardStep::BasicInfo);
        assert_eq!(
            draft.field(Field::Name).and_then(FieldValue::as_text),
            Some("Sunlit Garden 3-801")
        );
        assert_eq!(draft.advance().unwrap(), WizardStep::StyleSelection);
    }

    #[test]
    fn retreat_at_first_step_is_rejected() {
        let mut draft = WizardDraft::new();
        assert_eq!(draft.retreat().unwrap_err(), WizardError::AtFirstStep);
    }

    #[test]
    fn advance_at_terminal_step_is_rejected() {
        let mut draft = draft_with_basics();
        for _ in 0..3 {
            draft.advance().unwrap();
        }
        assert_eq!(draft.current_step(), WizardStep::Confirm);
        assert_eq!(draft.advance().unwrap_err(), WizardError::AtTerminalStep);
    }

    #[test]
    fn style_cap_rejects_the_fourth_selection() {
        let mut draft = WizardDraft::new();
        for style in ["modern", "nordic", "japanese"] {
            assert!(draft.toggle_style(StyleId::from(style)).unwrap());
        }
        let err = draft.toggle_style(StyleId::from("luxury")).unwrap_err();
        assert_eq!(err, WizardError::SelectionLimitExceeded { cap: 3 });
        assert_eq!(draft.selected_styles().len(), 3);
    }

    #[test]
    fn toggle_twice_restores_prior_selection() {
        let mut draft = WizardDraft::new();
        draft.toggle_style(StyleId::from("modern")).unwrap();
        let before = draft.selected_styles().to_vec();
        draft.toggle_style(StyleId::from("nordic")).unwrap();
        draft.toggle_style(StyleId::from("nordic")).unwrap();
        assert_eq!(draft.selected_styles(), before.as_slice());
    }

    #[test]
    fn removal_is_never_capped() {
        let mut draft = WizardDraft::new();
        for style in ["modern", "nordic", "japanese"] {
            draft.toggle_style(StyleId::from(style)).unwrap();
        }
        assert!(!draft.toggle_style(StyleId::from("nordic")).unwrap());
        assert_eq!(draft.selected_styles().len(), 2);
    }

    #[test]
    fn ratios_track_selection_and_sum_to_total() {
        let mut draft = WizardDraft::new();
        draft.toggle_style(StyleId::from("modern")).unwrap();
        assert!(draft.style_ratios().is_empty());

        draft.toggle_style(StyleId::from("nordic")).unwrap();
        assert_eq!(draft.style_ratios().len(), 2);
        let sum: u32 = draft.style_ratios().values().map(|&v| u32::from(v)).sum();
        assert_eq!(sum, 100);

        draft.toggle_style(StyleId::from("japanese")).unwrap();
        let ratios = draft.style_ratios();
        assert_eq!(ratios.len(), 3);
        assert_eq!(ratios[&StyleId::from("modern")], 34);
        assert_eq!(ratios[&StyleId::from("nordic")], 33);
        assert_eq!(ratios[&StyleId::from("japanese")], 33);
    }

    #[test]
    fn dropping_below_two_styles_clears_ratios() {
        let mut draft = WizardDraft::new();
        draft.toggle_style(StyleId::from("modern")).unwrap();
        draft.toggle_style(StyleId::from("nordic")).unwrap();
        assert!(!draft.style_ratios().is_empty());

        draft.toggle_style(StyleId::from("nordic")).unwrap();
        assert!(draft.style_ratios().is_empty());
    }

    #[test]
    fn ratio_override_is_validated() {
        let mut draft = WizardDraft::new();
        draft.toggle_style(StyleId::from("modern")).unwrap();
        draft.toggle_style(StyleId::from("nordic")).unwrap();

        let wrong_keys: BTreeMap<StyleId, u8> =
            [(StyleId::from("modern"), 50), (StyleId::from("luxury"), 50)].into();
        assert!(matches!(
            draft.set_style_ratios(wrong_keys),
            Err(WizardError::RatioKeysMismatch { .. })
        ));

        let wrong_sum: BTreeMap<StyleId, u8> =
            [(StyleId::from("modern"), 50), (StyleId::from("nordic"), 40)].into();
        assert_eq!(
            draft.set_style_ratios(wrong_sum),
            Err(WizardError::RatioSumMismatch { sum: 90 })
        );

        let valid: BTreeMap<StyleId, u8> =
            [(StyleId::from("modern"), 70), (StyleId::from("nordic"), 30)].into();
        draft.set_style_ratios(valid).unwrap();
        assert_eq!(draft.style_ratios()[&StyleId::from("modern")], 70);
    }

    #[test]
    fn submit_before_terminal_step_is_rejected() {
        let draft = draft_with_basics();
        assert_eq!(draft.submit().unwrap_err(), WizardError::NotAtTerminalStep);
    }

    #[test]
    fn submit_revalidates_every_step() {
        let mut draft = draft_with_basics();
        for _ in 0..3 {
            draft.advance().unwrap();
        }
        // Blank out a basics field after passing its gate.
        draft.set_field(Field::Name, "");
        let err = draft.submit().unwrap_err();
        assert_eq!(
            err,
            WizardError::Validation {
                step: WizardStep::BasicInfo,
                missing: vec![Field::Name],
            }
        );
        assert_eq!(draft.current_step(), WizardStep::Confirm);
    }

    #[test]
    fn submit_builds_the_payload() {
        let mut draft = draft_with_basics();
        draft.set_field(Field::Description, "89m² three-bed");
        draft.set_field(Field::ImageCount, 500u32);
        draft.toggle_style(StyleId::from("modern")).unwrap();
        draft.toggle_style(StyleId::from("nordic")).unwrap();
        draft.set_field(Field::Likes, FieldValue::Tags(vec!["bright".into()]));
        draft.set_field(Field::Pets, FieldValue::Pets(PetPolicy::Cat));
        draft.set_field(
            Field::Budget,
            casa_domain::BudgetRange::new(300.0, 500.0),
        );
        for _ in 0..3 {
            draft.advance().unwrap();
        }

        let submission = draft.submit().unwrap();
        assert_eq!(submission.name, "Sunlit Garden 3-801");
        assert_eq!(submission.image_count, 500);
        assert!(submission.is_style_mix());
        assert_eq!(submission.style_ratios.len(), 2);
        assert_eq!(submission.family.members, 3);
        assert_eq!(submission.family.pets, PetPolicy::Cat);
        assert_eq!(submission.preferences.likes, vec!["bright".to_string()]);
        assert_eq!(submission.budget.unwrap().max, 500.0);
    }
}
