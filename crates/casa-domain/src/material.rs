//! Catalog material model
//!
//! Materials are the immutable source-of-truth records the filter engine
//! runs over. Construction uses the builder style; nothing here mutates
//! a material after it enters a catalog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::style::StyleId;

/// Unique material identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub Uuid);

impl MaterialId {
    /// Generate new material ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MaterialId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Material category
///
/// Closed roster matching the catalog taxonomy; `slug` is the stable
/// machine identifier, `label` the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Floor,
    Tile,
    Wall,
    Ceiling,
    Door,
    Cabinet,
    Bathroom,
    Lighting,
    Furniture,
    Curtain,
    Hardware,
    Paint,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 12] = [
        Category::Floor,
        Category::Tile,
        Category::Wall,
        Category::Ceiling,
        Category::Door,
        Category::Cabinet,
        Category::Bathroom,
        Category::Lighting,
        Category::Furniture,
        Category::Curtain,
        Category::Hardware,
        Category::Paint,
    ];

    /// Stable machine identifier
    #[inline]
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Floor => "floor",
            Category::Tile => "tile",
            Category::Wall => "wall",
            Category::Ceiling => "ceiling",
            Category::Door => "door",
            Category::Cabinet => "cabinet",
            Category::Bathroom => "bathroom",
            Category::Lighting => "lighting",
            Category::Furniture => "furniture",
            Category::Curtain => "curtain",
            Category::Hardware => "hardware",
            Category::Paint => "paint",
        }
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Floor => "Flooring",
            Category::Tile => "Tiles",
            Category::Wall => "Wall finishes",
            Category::Ceiling => "Ceilings",
            Category::Door => "Doors & windows",
            Category::Cabinet => "Cabinetry",
            Category::Bathroom => "Bathroom",
            Category::Lighting => "Lighting",
            Category::Furniture => "Furniture",
            Category::Curtain => "Curtains",
            Category::Hardware => "Hardware",
            Category::Paint => "Paint & coatings",
        }
    }

    /// Icon shown on the category chip
    #[inline]
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Floor => "🪵",
            Category::Tile => "⬜",
            Category::Wall => "🧱",
            Category::Ceiling => "⬆️",
            Category::Door => "🚪",
            Category::Cabinet => "🗄️",
            Category::Bathroom => "🚿",
            Category::Lighting => "💡",
            Category::Furniture => "🛋️",
            Category::Curtain => "🪟",
            Category::Hardware => "🔧",
            Category::Paint => "🎨",
        }
    }

    /// Resolve a slug back to a category
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.slug() == slug)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sourcing channel for a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Supplier {
    /// Online marketplace listing
    OnlineMall,
    /// Brand flagship store
    FlagshipStore,
    /// Physical showroom partner
    Showroom,
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Supplier::OnlineMall => "online mall",
            Supplier::FlagshipStore => "flagship store",
            Supplier::Showroom => "showroom",
        };
        write!(f, "{name}")
    }
}

/// Pricing unit for a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    PerSquareMetre,
    PerPiece,
    PerSet,
    PerMetre,
}

impl std::fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = match self {
            PriceUnit::PerSquareMetre => "per m²",
            PriceUnit::PerPiece => "per piece",
            PriceUnit::PerSet => "per set",
            PriceUnit::PerMetre => "per metre",
        };
        write!(f, "{unit}")
    }
}

/// A single catalog material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique identifier
    pub id: MaterialId,
    /// Product name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Category
    pub category: Category,
    /// Unit price
    pub price: f64,
    /// Pricing unit
    pub unit: PriceUnit,
    /// Sourcing channel
    pub supplier: Supplier,
    /// Average customer rating, 0.0..=5.0
    pub rating: f32,
    /// Units sold
    pub sales: u32,
    /// Style tags this material suits
    pub styles: Vec<StyleId>,
    /// Available colourways
    pub colors: Vec<String>,
}

impl Material {
    /// Create a material with the required fields; everything else via `with_*`
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        category: Category,
        price: f64,
    ) -> Self {
        Self {
            id: MaterialId::new(),
            name: name.into(),
            brand: brand.into(),
            category,
            price,
            unit: PriceUnit::PerSquareMetre,
            supplier: Supplier::OnlineMall,
            rating: 0.0,
            sales: 0,
            styles: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// With pricing unit
    #[inline]
    #[must_use]
    pub fn with_unit(mut self, unit: PriceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// With sourcing channel
    #[inline]
    #[must_use]
    pub fn with_supplier(mut self, supplier: Supplier) -> Self {
        self.supplier = supplier;
        self
    }

    /// With rating and sales volume
    #[inline]
    #[must_use]
    pub fn with_popularity(mut self, rating: f32, sales: u32) -> Self {
        self.rating = rating;
        self.sales = sales;
        self
    }

    /// With style tags
    #[must_use]
    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StyleId>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    /// With colourways
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this material carries the given style tag
    #[inline]
    #[must_use]
    pub fn has_style(&self, style: &StyleId) -> bool {
        self.styles.iter().any(|s| s == style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
            assert!(!category.icon().is_empty());
        }
        assert_eq!(Category::from_slug("nonsense"), None);
    }

    #[test]
    fn material_builder() {
        let material = Material::new("Engineered oak flooring", "Sylvan", Category::Floor, 189.0)
            .with_supplier(Supplier::Showroom)
            .with_popularity(4.8, 5000)
            .with_styles(["modern", "nordic"]);

        assert_eq!(material.supplier, Supplier::Showroom);
        assert_eq!(material.sales, 5000);
        assert!(material.has_style(&StyleId::from("nordic")));
        assert!(!material.has_style(&StyleId::from("industrial")));
    }
}
