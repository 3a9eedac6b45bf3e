//! Filter criteria
//!
//! A criteria object is a bag of independent predicates combined by AND;
//! only the style-tag predicate is OR within itself. Every field defaults
//! to "no constraint", so an empty criteria is the identity filter.

use serde::{Deserialize, Serialize};

use casa_domain::{Category, StyleId, Supplier};

/// Category predicate: everything, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Match every category
    #[default]
    All,
    /// Match a single category
    Only(Category),
}

impl CategoryFilter {
    /// Whether the given category passes this predicate
    #[inline]
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

/// Inclusive price window
///
/// `min > max` is accepted and simply matches nothing; callers own that
/// edge (the slider UI cannot produce it, hand-built criteria can).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl PriceRange {
    /// Create a price window
    #[inline]
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether the price falls inside the window, bounds included
    #[inline]
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Material filter criteria
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring over name and brand; empty = no constraint
    pub query: String,
    /// Category predicate
    pub category: CategoryFilter,
    /// Price window; `None` = no constraint
    pub price: Option<PriceRange>,
    /// Style tags, match-any; empty = no constraint
    pub styles: Vec<StyleId>,
    /// Exact supplier; `None` = no constraint
    pub supplier: Option<Supplier>,
}

impl FilterCriteria {
    /// Criteria with every predicate at its default (matches everything)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With free-text query
    #[inline]
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// With a single category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    /// With an inclusive price window
    #[inline]
    #[must_use]
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price = Some(PriceRange::new(min, max));
        self
    }

    /// With style tags (match-any)
    #[must_use]
    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StyleId>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    /// With an exact supplier
    #[inline]
    #[must_use]
    pub fn with_supplier(mut self, supplier: Supplier) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// Whether every predicate is at its default
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.query.is_empty()
            && self.category == CategoryFilter::All
            && self.price.is_none()
            && self.styles.is_empty()
            && self.supplier.is_none()
    }
}
