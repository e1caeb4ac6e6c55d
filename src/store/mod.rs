//! Dataset ownership: observations grouped into per-entity series, with the
//! entity index sorted once at construction so directories stay stable.

pub mod loader;
pub mod schema;
pub mod synthetic;

pub use loader::{DataProvenance, load_or_demo, parse_observations};
pub use schema::{IndexRecord, QuoteRecord, RawRecord};
pub use synthetic::{DEMO_ENTITIES, demo_observations};

use indexmap::IndexMap;
use tracing::warn;

use crate::core::Observation;

/// The full loaded dataset. Construction canonicalizes each entity's series:
/// ascending by date, one observation per date (last arrival wins).
#[derive(Debug, Clone, Default)]
pub struct ObservationSet {
    by_entity: IndexMap<String, Vec<Observation>>,
}

impl ObservationSet {
    #[must_use]
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let mut by_entity: IndexMap<String, Vec<Observation>> = IndexMap::new();
        for obs in observations {
            by_entity
                .entry(obs.entity_id.clone())
                .or_default()
                .push(obs);
        }

        let mut duplicate_count = 0_usize;
        for series in by_entity.values_mut() {
            series.sort_by_key(|obs| obs.date);
            let sorted = std::mem::take(series);
            let mut deduped: Vec<Observation> = Vec::with_capacity(sorted.len());
            for obs in sorted {
                if let Some(last) = deduped.last_mut() {
                    if last.date == obs.date {
                        *last = obs;
                        duplicate_count += 1;
                        continue;
                    }
                }
                deduped.push(obs);
            }
            *series = deduped;
        }

        if duplicate_count > 0 {
            warn!(
                duplicate_count,
                entity_count = by_entity.len(),
                "collapsed repeated dates within entity series"
            );
        }
        by_entity.sort_unstable_keys();
        Self { by_entity }
    }

    /// Entity ids in lexicographic order.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.by_entity.keys().map(String::as_str)
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.by_entity.len()
    }

    /// Full series for an entity, ascending by date. Unknown entities come
    /// back empty rather than erroring.
    #[must_use]
    pub fn series(&self, entity_id: &str) -> &[Observation] {
        self.by_entity.get(entity_id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, entity_id: &str) -> bool {
        self.by_entity.contains_key(entity_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_entity.is_empty()
    }

    #[must_use]
    pub fn total_observations(&self) -> usize {
        self.by_entity.values().map(Vec::len).sum()
    }
}
