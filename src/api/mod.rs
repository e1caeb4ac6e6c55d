//! Session controller and derived views.
//!
//! [`DashboardEngine`] is the single owner of session state: every selection
//! mutation goes through it, and every view it hands out is recomputed from
//! the canonical dataset on request. The impl is split per concern:
//! construction and accessors in `engine`, mutators in `selection`, derived
//! views in `views`, exports in `export`, the persisted-session contract in
//! `snapshot`.

pub mod engine;
pub mod engine_config;
pub mod export;
pub mod prefs;
pub mod selection;
pub mod session;
pub mod snapshot;
pub mod views;

pub use engine::DashboardEngine;
pub use engine_config::DashboardEngineConfig;
pub use export::{CSV_HEADER, CsvExport};
pub use prefs::{FavoritesRegistry, MemoryPreferenceStore, PreferenceStore, Theme};
pub use session::SessionState;
pub use snapshot::{SESSION_SNAPSHOT_JSON_SCHEMA_V1, SessionSnapshotJsonContractV1};
pub use views::{DirectoryEntry, DirectoryFilter};
