//! Catalog error types

use casa_domain::MaterialId;

/// Catalog failures
///
/// Filtering itself is total; only repository lookups can fail, and every
/// failure is recoverable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No material with the given id
    #[error("material not found: {0}")]
    MaterialNotFound(MaterialId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let id = MaterialId::new();
        let err = CatalogError::MaterialNotFound(id);
        assert!(err.to_string().contains("material not found"));
    }
}
