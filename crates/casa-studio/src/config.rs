//! Studio configuration

use serde::{Deserialize, Serialize};

use casa_domain::OutputConfig;

/// Studio configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Deliverables stamped onto newly created projects
    pub outputs: OutputConfig,
    /// Move submissions straight from pending into processing
    pub auto_start: bool,
}

impl StudioConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With deliverable selection
    #[inline]
    #[must_use]
    pub fn with_outputs(mut self, outputs: OutputConfig) -> Self {
        self.outputs = outputs;
        self
    }

    /// With auto-start on submission
    #[inline]
    #[must_use]
    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_request_every_deliverable() {
        let config = StudioConfig::new();
        assert!(config.outputs.renders);
        assert!(config.outputs.tour_3d);
        assert!(config.outputs.cad);
        assert!(!config.auto_start);
    }
}
