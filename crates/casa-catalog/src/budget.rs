//! Budget tier planner
//!
//! Splits a renovation budget across material categories for three
//! spending tiers. Economy trims the budget to 70%, premium stretches it
//! to 130%; the allocation percentages per tier differ slightly to favour
//! visible surfaces as budgets grow.

use serde::{Deserialize, Serialize};

/// Spending tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Economy,
    Standard,
    Premium,
}

impl BudgetTier {
    /// All tiers, cheapest first
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Economy, BudgetTier::Standard, BudgetTier::Premium];

    /// Multiplier applied to the requested budget for this tier
    #[inline]
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            BudgetTier::Economy => 0.7,
            BudgetTier::Standard => 1.0,
            BudgetTier::Premium => 1.3,
        }
    }

    /// Allocation percentages as (spend area, share of tier budget)
    #[must_use]
    pub fn allocations(self) -> &'static [(SpendArea, f64)] {
        match self {
            BudgetTier::Economy => &[
                (SpendArea::Floor, 0.15),
                (SpendArea::Wall, 0.10),
                (SpendArea::Ceiling, 0.05),
                (SpendArea::Doors, 0.08),
                (SpendArea::Bathroom, 0.12),
                (SpendArea::Kitchen, 0.15),
                (SpendArea::Lighting, 0.05),
                (SpendArea::Furniture, 0.20),
                (SpendArea::SoftFurnishing, 0.10),
            ],
            BudgetTier::Standard => &[
                (SpendArea::Floor, 0.18),
                (SpendArea::Wall, 0.12),
                (SpendArea::Ceiling, 0.06),
                (SpendArea::Doors, 0.10),
                (SpendArea::Bathroom, 0.14),
                (SpendArea::Kitchen, 0.16),
                (SpendArea::Lighting, 0.06),
                (SpendArea::Furniture, 0.18),
                (SpendArea::SoftFurnishing, 0.10),
            ],
            BudgetTier::Premium => &[
                (SpendArea::Floor, 0.20),
                (SpendArea::Wall, 0.14),
                (SpendArea::Ceiling, 0.08),
                (SpendArea::Doors, 0.12),
                (SpendArea::Bathroom, 0.16),
                (SpendArea::Kitchen, 0.18),
                (SpendArea::Lighting, 0.08),
                (SpendArea::Furniture, 0.15),
                (SpendArea::SoftFurnishing, 0.09),
            ],
        }
    }
}

/// Spending area a budget slice is earmarked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendArea {
    Floor,
    Wall,
    Ceiling,
    Doors,
    Bathroom,
    Kitchen,
    Lighting,
    Furniture,
    SoftFurnishing,
}

/// One tier's worked-out budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierPlan {
    /// The tier
    pub tier: BudgetTier,
    /// Tier budget after the multiplier
    pub total_budget: f64,
    /// Budget per square metre of floor area
    pub per_sqm: f64,
    /// Earmarked amounts per spend area
    pub allocations: Vec<(SpendArea, f64)>,
}

/// Work out all three tier plans for a requested budget and floor area
///
/// `area_sqm` must be positive; a zero or negative area yields `None`
/// rather than a division blow-up.
#[must_use]
pub fn plan(total_budget: f64, area_sqm: f64) -> Option<Vec<TierPlan>> {
    if area_sqm <= 0.0 {
        return None;
    }

    let plans = BudgetTier::ALL
        .iter()
        .map(|&tier| {
            let tier_budget = total_budget * tier.multiplier();
            TierPlan {
                tier,
                total_budget: round2(tier_budget),
                per_sqm: round2(tier_budget / area_sqm),
                allocations: tier
                    .allocations()
                    .iter()
                    .map(|&(area, share)| (area, round2(tier_budget * share)))
                    .collect(),
            }
        })
        .collect();
    Some(plans)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
