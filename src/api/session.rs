//! Explicit session state. Everything a dashboard needs to restore its
//! controls lives in one serializable value; mutation goes through
//! `DashboardEngine` methods alone.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, TimeRange};

use super::prefs::Theme;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub selected_entity: Option<String>,
    #[serde(default)]
    pub time_range: TimeRange,
    #[serde(default)]
    pub chart_kind: ChartKind,
    #[serde(default)]
    pub compare_mode: bool,
    /// Entities queued for the comparison overlay, in the order they joined.
    #[serde(default)]
    pub comparison: IndexSet<String>,
    #[serde(default)]
    pub theme: Theme,
}
