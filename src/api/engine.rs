use chrono::NaiveDate;
use indexmap::IndexSet;
use tracing::debug;

use crate::core::{ChartKind, Observation, TimeRange};
use crate::store::{DataProvenance, ObservationSet, load_or_demo};

use super::prefs::{FavoritesRegistry, MemoryPreferenceStore, PreferenceStore, Theme};
use super::{DashboardEngineConfig, SessionState};

/// Session controller for one dashboard.
///
/// `DashboardEngine` owns the dataset, the session state, and the favorites
/// registry. Every session mutation goes through its methods, and every view
/// is recomputed from the canonical data on request rather than cached.
pub struct DashboardEngine<P: PreferenceStore> {
    pub(super) data: ObservationSet,
    pub(super) provenance: DataProvenance,
    pub(super) session: SessionState,
    pub(super) favorites: FavoritesRegistry,
    pub(super) prefs: P,
    pub(super) today: NaiveDate,
}

impl DashboardEngine<MemoryPreferenceStore> {
    /// Engine backed by an in-memory preference store, for tests and
    /// headless hosts.
    #[must_use]
    pub fn with_memory_prefs(payload: Option<&str>, config: DashboardEngineConfig) -> Self {
        Self::new(MemoryPreferenceStore::new(), payload, config)
    }
}

impl<P: PreferenceStore> DashboardEngine<P> {
    /// Creates an engine from an optional feed payload, falling back to the
    /// demo dataset when the payload is missing or unusable. The first
    /// entity in the sorted directory starts selected.
    #[must_use]
    pub fn new(prefs: P, payload: Option<&str>, config: DashboardEngineConfig) -> Self {
        let (data, provenance) = load_or_demo(payload, config.today, config.demo_seed);
        Self::from_parts(prefs, data, provenance, config)
    }

    /// Creates an engine over observations a host ingested itself.
    #[must_use]
    pub fn from_observations(
        prefs: P,
        observations: Vec<Observation>,
        config: DashboardEngineConfig,
    ) -> Self {
        let data = ObservationSet::from_observations(observations);
        Self::from_parts(prefs, data, DataProvenance::Feed, config)
    }

    fn from_parts(
        prefs: P,
        data: ObservationSet,
        provenance: DataProvenance,
        config: DashboardEngineConfig,
    ) -> Self {
        let favorites = FavoritesRegistry::load(&prefs);
        let theme = Theme::load(&prefs);
        let selected_entity = data.entities().next().map(str::to_owned);
        debug!(
            entities = data.entity_count(),
            observations = data.total_observations(),
            ?provenance,
            "dashboard engine ready"
        );
        Self {
            data,
            provenance,
            session: SessionState {
                selected_entity,
                time_range: config.initial_range,
                chart_kind: config.initial_chart_kind,
                compare_mode: false,
                comparison: IndexSet::new(),
                theme,
            },
            favorites,
            prefs,
            today: config.today,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn selected_entity(&self) -> Option<&str> {
        self.session.selected_entity.as_deref()
    }

    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        self.session.time_range
    }

    #[must_use]
    pub fn chart_kind(&self) -> ChartKind {
        self.session.chart_kind
    }

    #[must_use]
    pub fn compare_mode(&self) -> bool {
        self.session.compare_mode
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.session.theme
    }

    #[must_use]
    pub fn data_provenance(&self) -> DataProvenance {
        self.provenance
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// All entity ids, sorted.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.data.entities()
    }

    #[must_use]
    pub fn is_favorite(&self, entity_id: &str) -> bool {
        self.favorites.contains(entity_id)
    }

    pub fn favorites(&self) -> impl Iterator<Item = &str> {
        self.favorites.iter()
    }

    #[must_use]
    pub fn preferences(&self) -> &P {
        &self.prefs
    }

    #[must_use]
    pub fn into_preferences(self) -> P {
        self.prefs
    }
}
