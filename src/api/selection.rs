use tracing::debug;

use crate::core::{ChartKind, TimeRange};

use super::DashboardEngine;
use super::prefs::{PreferenceStore, Theme};

impl<P: PreferenceStore> DashboardEngine<P> {
    /// Records the selection. Ids without data are allowed; views over them
    /// come back empty, which hosts render as a "no data" state. In compare
    /// mode the selection also joins the comparison set.
    pub fn select_entity(&mut self, entity_id: impl Into<String>) {
        let entity_id = entity_id.into();
        if self.session.compare_mode {
            self.session.comparison.insert(entity_id.clone());
        }
        debug!(
            entity = %entity_id,
            compare_mode = self.session.compare_mode,
            "select entity"
        );
        self.session.selected_entity = Some(entity_id);
    }

    pub fn set_time_range(&mut self, range: TimeRange) {
        debug!(?range, "set time range");
        self.session.time_range = range;
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        debug!(?kind, "set chart kind");
        self.session.chart_kind = kind;
    }

    /// Entering compare mode seeds the comparison set with the current
    /// selection, if any; leaving clears the set. Returns the new mode.
    pub fn toggle_compare_mode(&mut self) -> bool {
        self.session.compare_mode = !self.session.compare_mode;
        if self.session.compare_mode {
            if let Some(selected) = self.session.selected_entity.clone() {
                self.session.comparison.insert(selected);
            }
        } else {
            self.session.comparison.clear();
        }
        debug!(
            compare_mode = self.session.compare_mode,
            comparison = self.session.comparison.len(),
            "toggle compare mode"
        );
        self.session.compare_mode
    }

    /// Queues an entity for the comparison overlay. The set deduplicates;
    /// re-adding a member keeps its original position. Returns whether the
    /// entity was newly added.
    pub fn add_to_comparison(&mut self, entity_id: impl Into<String>) -> bool {
        let entity_id = entity_id.into();
        let added = self.session.comparison.insert(entity_id.clone());
        debug!(entity = %entity_id, added, "add to comparison");
        added
    }

    /// Removes one entity from the comparison set, preserving the order of
    /// the remaining members.
    pub fn remove_from_comparison(&mut self, entity_id: &str) -> bool {
        let removed = self.session.comparison.shift_remove(entity_id);
        debug!(entity = %entity_id, removed, "remove from comparison");
        removed
    }

    pub fn clear_comparison(&mut self) {
        debug!(
            cleared = self.session.comparison.len(),
            "clear comparison"
        );
        self.session.comparison.clear();
    }

    /// Flips the favorite state of an entity and persists the whole set.
    /// Returns whether the entity is now a favorite.
    pub fn toggle_favorite(&mut self, entity_id: &str) -> bool {
        let now_favorite = self.favorites.toggle(entity_id, &mut self.prefs);
        debug!(entity = %entity_id, now_favorite, "toggle favorite");
        now_favorite
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.session.theme = theme;
        theme.persist(&mut self.prefs);
        debug!(?theme, "set theme");
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.session.theme.toggled();
        self.set_theme(next);
        next
    }
}
