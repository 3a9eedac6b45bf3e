//! Catalog repository seam
//!
//! The filter engine never owns data; it runs over whatever a
//! `CatalogRepository` hands it. Tests and the demo studio use the
//! in-memory implementation, production wires a backend-backed one.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use casa_domain::{Material, MaterialId};

use crate::criteria::FilterCriteria;
use crate::engine;
use crate::error::CatalogError;

const ALTERNATIVES_LIMIT: usize = 5;
const ALTERNATIVES_PRICE_WINDOW: f64 = 0.2;

/// Source of catalog materials
pub trait CatalogRepository: Send + Sync {
    /// Snapshot of every material, in catalog order
    fn materials(&self) -> Vec<Material>;

    /// Look up one material
    fn material(&self, id: MaterialId) -> Result<Material, CatalogError>;

    /// Filter the catalog
    ///
    /// Default implementation runs the pure engine over `materials()`.
    fn search(&self, criteria: &FilterCriteria) -> Vec<Material> {
        engine::filter(&self.materials(), criteria)
    }

    /// Alternatives to a material: same category, the material itself
    /// excluded, price within ±20% of the original, at most five results.
    fn alternatives(&self, id: MaterialId) -> Result<Vec<Material>, CatalogError> {
        let original = self.material(id)?;
        let window = original.price * ALTERNATIVES_PRICE_WINDOW;
        let (low, high) = (original.price - window, original.price + window);

        let found: Vec<Material> = self
            .materials()
            .into_iter()
            .filter(|m| {
                m.id != id
                    && m.category == original.category
                    && m.price >= low
                    && m.price <= high
            })
            .take(ALTERNATIVES_LIMIT)
            .collect();
        debug!(material = %id, count = found.len(), "alternatives lookup");
        Ok(found)
    }
}

/// In-memory catalog
///
/// Cheaply cloneable; the material list sits behind one lock so a shell
/// can share a single catalog across views.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    materials: Arc<RwLock<Vec<Material>>>,
}

impl InMemoryCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the given materials
    #[must_use]
    pub fn with_materials(materials: Vec<Material>) -> Self {
        Self {
            materials: Arc::new(RwLock::new(materials)),
        }
    }

    /// Add a material
    pub fn insert(&self, material: Material) {
        self.materials.write().push(material);
    }

    /// Number of materials held
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.read().len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.read().is_empty()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn materials(&self) -> Vec<Material> {
        self.materials.read().clone()
    }

    fn material(&self, id: MaterialId) -> Result<Material, CatalogError> {
        self.materials
            .read()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(CatalogError::MaterialNotFound(id))
    }
}
