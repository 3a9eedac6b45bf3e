//! The filter engine
//!
//! Pure, total, order-preserving. A material matches when every predicate
//! holds; the style predicate alone is satisfied by any tag overlap.

use tracing::debug;

use casa_domain::Material;

use crate::criteria::FilterCriteria;

/// Whether one material passes the criteria
#[must_use]
pub fn matches(material: &Material, criteria: &FilterCriteria) -> bool {
    let matches_query = criteria.query.is_empty() || {
        let query = criteria.query.to_lowercase();
        material.name.to_lowercase().contains(&query)
            || material.brand.to_lowercase().contains(&query)
    };

    let matches_category = criteria.category.matches(material.category);

    let matches_price = criteria
        .price
        .map_or(true, |range| range.contains(material.price));

    let matches_style =
        criteria.styles.is_empty() || criteria.styles.iter().any(|s| material.has_style(s));

    let matches_supplier = criteria
        .supplier
        .map_or(true, |supplier| material.supplier == supplier);

    matches_query && matches_category && matches_price && matches_style && matches_supplier
}

/// Filter a material list against the criteria
///
/// Order-preserving and side-effect free. An empty input yields an empty
/// output; an inverted price window yields an empty output. Never fails.
#[must_use]
pub fn filter(materials: &[Material], criteria: &FilterCriteria) -> Vec<Material> {
    let matched: Vec<Material> = materials
        .iter()
        .filter(|m| matches(m, criteria))
        .cloned()
        .collect();
    debug!(
        total = materials.len(),
        matched = matched.len(),
        "catalog filter run"
    );
    matched
}

/// Aggregate statistics over a filtered subset
///
/// Always derived from the same filtered sequence the shell renders,
/// never cached on its own, so the count and the total cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatalogStats {
    /// Number of matching materials
    pub count: usize,
    /// Sum of unit prices over the matches
    pub estimated_total: f64,
}

impl CatalogStats {
    /// Compute stats from a filtered subset
    #[must_use]
    pub fn of(materials: &[Material]) -> Self {
        Self {
            count: materials.len(),
            estimated_total: materials.iter().map(|m| m.price).sum(),
        }
    }
}
