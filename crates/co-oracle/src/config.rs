//! Configuration for an oracle session.

use co_core::{RandomConfig, SelectionMode};
use co_insight::InsightConfig;

/// Starting state for an [`crate::Oracle`].
#[derive(Debug, Clone, PartialEq)]
pub struct OracleConfig {
    /// Initial bounds and options.
    pub random: RandomConfig,
    /// Initial mode.
    pub mode: SelectionMode,
    /// Insight used if a numeric or option insight task dies.
    pub numeric_fallback: String,
    /// Insight used if a divination insight task dies.
    pub divination_fallback: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        let insight = InsightConfig::default();
        Self {
            random: RandomConfig::default(),
            mode: SelectionMode::Numeric,
            numeric_fallback: insight.numeric.error_fallback,
            divination_fallback: insight.divination.error_fallback,
        }
    }
}

impl OracleConfig {
    /// Set the starting bounds and options.
    pub fn with_random(mut self, random: RandomConfig) -> Self {
        self.random = random;
        self
    }

    /// Set the starting mode.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reuse the error fallbacks of an insight configuration.
    pub fn with_fallbacks_from(mut self, insight: &InsightConfig) -> Self {
        self.numeric_fallback = insight.numeric.error_fallback.clone();
        self.divination_fallback = insight.divination.error_fallback.clone();
        self
    }
}
