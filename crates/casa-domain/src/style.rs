//! Decoration styles
//!
//! Styles are open-ended tags on materials and projects, but the wizard
//! offers a fixed roster of eight to pick from.

use serde::{Deserialize, Serialize};

/// Stable style tag, e.g. `"modern"`, `"nordic"`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(pub String);

impl StyleId {
    /// Create a style tag
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StyleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selectable style option offered by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Stable tag
    pub id: StyleId,
    /// Display name
    pub name: String,
    /// One-line pitch shown on the style card
    pub description: String,
}

impl Style {
    fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: StyleId::from(id),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// The eight styles the wizard offers
    #[must_use]
    pub fn roster() -> Vec<Style> {
        vec![
            Style::new("modern", "Modern minimal", "Clean lines, function first"),
            Style::new("nordic", "Nordic", "Natural materials, bright and warm"),
            Style::new("new_chinese", "New Chinese", "Tradition meets the contemporary"),
            Style::new("luxury", "Light luxury", "Refined finishes, quiet opulence"),
            Style::new("industrial", "Industrial", "Raw textures, bold character"),
            Style::new("japanese", "Japandi", "Zen restraint, deliberate emptiness"),
            Style::new("american", "American classic", "Comfortable, generous, timeless"),
            Style::new("mediterranean", "Mediterranean", "Fresh blues and sunlit whites"),
        ]
    }

    /// Look up a roster style by tag
    #[must_use]
    pub fn find(id: &StyleId) -> Option<Style> {
        Self::roster().into_iter().find(|s| &s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_unique_ids() {
        let roster = Style::roster();
        for (i, a) in roster.iter().enumerate() {
            for b in roster.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_resolves_roster_tags() {
        assert!(Style::find(&StyleId::from("nordic")).is_some());
        assert!(Style::find(&StyleId::from("brutalist")).is_none());
    }
}
