pub mod compare;
pub mod observation;
pub mod primitives;
pub mod range;
pub mod shape;
pub mod statistics;

pub use compare::{
    ComparisonEntry, ComparisonView, NormalizedPoint, NormalizedSeries, PALETTE_CYCLE,
    build_shared_axis, normalize_comparison, normalize_series,
};
pub use observation::Observation;
pub use range::{TimeRange, filter_series_by_range};
pub use shape::{CandleDirection, ChartKind, RenderPoint, RenderSeries, shape_series};
pub use statistics::{ChangeStat, SeriesStatistics, compute_statistics};
