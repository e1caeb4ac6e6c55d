use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, TimeRange};
use crate::error::{DashboardError, DashboardResult};

/// Engine bootstrap configuration.
///
/// Serializable so host applications can persist dashboard setup without
/// inventing their own ad-hoc format. `today` anchors every relative time
/// range; nothing in the crate reads an ambient clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardEngineConfig {
    pub today: NaiveDate,
    /// Seed for synthesized volumes and the demo dataset.
    #[serde(default = "default_demo_seed")]
    pub demo_seed: u64,
    #[serde(default)]
    pub initial_range: TimeRange,
    #[serde(default)]
    pub initial_chart_kind: ChartKind,
}

impl DashboardEngineConfig {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            demo_seed: default_demo_seed(),
            initial_range: TimeRange::default(),
            initial_chart_kind: ChartKind::default(),
        }
    }

    #[must_use]
    pub fn with_demo_seed(mut self, seed: u64) -> Self {
        self.demo_seed = seed;
        self
    }

    #[must_use]
    pub fn with_initial_range(mut self, range: TimeRange) -> Self {
        self.initial_range = range;
        self
    }

    #[must_use]
    pub fn with_initial_chart_kind(mut self, kind: ChartKind) -> Self {
        self.initial_chart_kind = kind;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> DashboardResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| DashboardError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DashboardError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_demo_seed() -> u64 {
    42
}
