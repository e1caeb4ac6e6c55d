//! The persistence seam. Hosts adapt whatever key-value storage they have
//! behind [`PreferenceStore`]; the engine only ever reads and writes whole
//! string values, so a browser's local storage, a dotfile, or a test map all
//! fit.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Key holding the favorites snapshot, a JSON array of entity ids.
pub const FAVORITES_KEY: &str = "favorites";
/// Key holding the theme flag. Dark mode stores [`THEME_DARK_VALUE`]; light
/// mode removes the key entirely (legacy wire format).
pub const THEME_KEY: &str = "darkMode";
pub const THEME_DARK_VALUE: &str = "enabled";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and headless hosts. Nothing outlives it.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: IndexMap<String, String>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.values.shift_remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Reads the persisted theme. Anything other than the dark marker,
    /// including an absent key, means light.
    #[must_use]
    pub fn load(store: &impl PreferenceStore) -> Self {
        match store.get(THEME_KEY) {
            Some(value) if value == THEME_DARK_VALUE => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn persist(self, store: &mut impl PreferenceStore) {
        match self {
            Self::Dark => store.set(THEME_KEY, THEME_DARK_VALUE),
            Self::Light => store.remove(THEME_KEY),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The favorites set: reloaded once per session, written back after every
/// mutation as a whole-set snapshot. Iteration order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct FavoritesRegistry {
    entries: IndexSet<String>,
}

impl FavoritesRegistry {
    /// Reads the persisted set; an unreadable snapshot falls back to empty
    /// with a warning instead of failing session start.
    #[must_use]
    pub fn load(store: &impl PreferenceStore) -> Self {
        let Some(raw) = store.get(FAVORITES_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<IndexSet<String>>(&raw) {
            Ok(entries) => Self { entries },
            Err(err) => {
                warn!(error = %err, "favorites snapshot unreadable, starting empty");
                Self::default()
            }
        }
    }

    /// Adds the entity if absent, removes it if present, persists the set,
    /// and reports whether the entity ended up a favorite.
    pub fn toggle(&mut self, entity_id: &str, store: &mut impl PreferenceStore) -> bool {
        let now_favorite = if self.entries.shift_remove(entity_id) {
            false
        } else {
            self.entries.insert(entity_id.to_owned());
            true
        };
        self.persist(store);
        now_favorite
    }

    fn persist(&self, store: &mut impl PreferenceStore) {
        match serde_json::to_string(&self.entries) {
            Ok(snapshot) => store.set(FAVORITES_KEY, &snapshot),
            Err(err) => warn!(error = %err, "failed to serialize favorites snapshot"),
        }
    }

    #[must_use]
    pub fn contains(&self, entity_id: &str) -> bool {
        self.entries.contains(entity_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
