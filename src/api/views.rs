use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::compare::{ComparisonEntry, build_shared_axis, normalize_comparison};
use crate::core::{
    ComparisonView, Observation, RenderSeries, SeriesStatistics, compute_statistics,
    filter_series_by_range, shape_series,
};

use super::DashboardEngine;
use super::prefs::PreferenceStore;

/// One row of the sidebar entity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub entity_id: String,
    pub is_favorite: bool,
    pub is_selected: bool,
}

/// Filters applied to the entity directory. The default shows everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryFilter {
    /// Case-insensitive substring match; empty means no search filter.
    pub search: String,
    pub favorites_only: bool,
}

impl DirectoryFilter {
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    #[must_use]
    pub fn with_favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }
}

impl<P: PreferenceStore> DashboardEngine<P> {
    /// The selected entity's series filtered to the active range. Views,
    /// statistics, and exports all read through here so they always agree.
    pub(super) fn filtered_series(&self, entity_id: &str) -> Vec<Observation> {
        filter_series_by_range(
            self.data.series(entity_id),
            self.session.time_range,
            self.today,
        )
    }

    /// The single-entity chart. `None` when nothing is selected; an empty
    /// series when the selection has no data in range.
    #[must_use]
    pub fn single_view(&self) -> Option<RenderSeries> {
        let entity = self.session.selected_entity.as_deref()?;
        let series = self.filtered_series(entity);
        trace!(entity = %entity, points = series.len(), "shape single view");
        Some(shape_series(entity, &series, self.session.chart_kind))
    }

    /// The comparison overlay for the current comparison set. Empty set,
    /// empty view.
    #[must_use]
    pub fn comparison_view(&self) -> ComparisonView {
        let entries: SmallVec<[ComparisonEntry; 5]> = self
            .session
            .comparison
            .iter()
            .map(|entity| ComparisonEntry::new(entity.clone(), self.filtered_series(entity)))
            .collect();
        let axis = build_shared_axis(&entries);
        let series = normalize_comparison(&entries);
        trace!(
            queued = entries.len(),
            plotted = series.len(),
            axis_points = axis.len(),
            "build comparison view"
        );
        ComparisonView { axis, series }
    }

    /// Statistics over exactly the series the single view renders. `None`
    /// when nothing is selected or the filtered series is empty.
    #[must_use]
    pub fn statistics(&self) -> Option<SeriesStatistics> {
        let entity = self.session.selected_entity.as_deref()?;
        compute_statistics(&self.filtered_series(entity))
    }

    /// The sidebar list: sorted entities narrowed by substring search and
    /// the favorites switch, each flagged for star and highlight rendering.
    #[must_use]
    pub fn entity_directory(&self, filter: &DirectoryFilter) -> Vec<DirectoryEntry> {
        let needle = filter.search.trim().to_lowercase();
        let entries: Vec<DirectoryEntry> = self
            .data
            .entities()
            .filter(|entity| needle.is_empty() || entity.to_lowercase().contains(&needle))
            .filter(|entity| !filter.favorites_only || self.favorites.contains(entity))
            .map(|entity| DirectoryEntry {
                entity_id: entity.to_owned(),
                is_favorite: self.favorites.contains(entity),
                is_selected: self.session.selected_entity.as_deref() == Some(entity),
            })
            .collect();
        trace!(
            shown = entries.len(),
            total = self.data.entity_count(),
            "entity directory"
        );
        entries
    }
}
