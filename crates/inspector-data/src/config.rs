//! Inspector configuration.

/// Configuration for the reference collaborator and the wire encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    /// Longest hierarchy an inspector query reports. Outermost ancestors are
    /// dropped first; the inspected node is always kept.
    pub max_depth: Option<usize>,

    /// Pretty-print JSON produced by `wire::to_json`.
    pub pretty: bool,
}

impl InspectorConfig {
    /// Effective depth cap, with `Some(0)` raised to one entry.
    pub fn depth_limit(&self) -> Option<usize> {
        self.max_depth.map(|d| d.max(1))
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            pretty: false,
        }
    }
}
