//! stockview-rs: a time-series engine for market/index dashboards.
//!
//! This crate owns the data side of a dashboard: feed loading with a demo
//! fallback, range selection, chart shaping, comparison normalization, and
//! descriptive statistics. Rendering, fetching, and storage backends stay in
//! the host behind small trait seams.

pub mod api;
pub mod core;
pub mod error;
pub mod store;
pub mod telemetry;

pub use api::{DashboardEngine, DashboardEngineConfig};
pub use error::{DashboardError, DashboardResult};
