//! Favourite materials
//!
//! A toggled id set. Unlike the wizard's style selection there is no cap;
//! toggling is a plain involution.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use casa_domain::MaterialId;

/// Set of favourited materials, in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet {
    ids: IndexSet<MaterialId>,
}

impl FavoriteSet {
    /// Empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a material; returns `true` when it is now favourited
    pub fn toggle(&mut self, id: MaterialId) -> bool {
        if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Whether the material is favourited
    #[inline]
    #[must_use]
    pub fn contains(&self, id: MaterialId) -> bool {
        self.ids.contains(&id)
    }

    /// Favourites in insertion order
    pub fn iter(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.ids.iter().copied()
    }

    /// Number of favourites
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no favourites exist
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
