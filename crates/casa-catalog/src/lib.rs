//! Casa catalog engine
//!
//! The material-catalog half of the core:
//! - Pure, order-preserving filtering over an injected repository
//! - Aggregate stats derived from the filtered subset
//! - Alternatives lookup and the budget tier planner
//! - Favourites as a toggled id set
//!
//! # Example
//!
//! ```rust,ignore
//! use casa_catalog::{CatalogRepository, FilterCriteria, InMemoryCatalog};
//!
//! let catalog = InMemoryCatalog::with_materials(casa_test_utils::sample_materials());
//! let matched = catalog.search(&FilterCriteria::new().with_query("oak"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod budget;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod repository;

// Re-exports for convenience
pub use budget::{plan as budget_plan, BudgetTier, SpendArea, TierPlan};
pub use criteria::{CategoryFilter, FilterCriteria, PriceRange};
pub use engine::{filter, matches, CatalogStats};
pub use error::CatalogError;
pub use favorites::FavoriteSet;
pub use repository::{CatalogRepository, InMemoryCatalog};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
