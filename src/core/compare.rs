//! Comparison normalization: rebasing several entities onto a shared
//! percentage axis so dashboards can overlay series with very different
//! absolute price levels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-compare")]
use rayon::prelude::*;

use crate::core::observation::Observation;
use crate::core::primitives::round2;

/// Number of distinct palette slots before overlay colors repeat.
pub const PALETTE_CYCLE: usize = 5;

/// One entity queued for comparison, already filtered to the active range.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    pub entity_id: String,
    pub series: Vec<Observation>,
}

impl ComparisonEntry {
    #[must_use]
    pub fn new(entity_id: impl Into<String>, series: Vec<Observation>) -> Self {
        Self {
            entity_id: entity_id.into(),
            series,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    pub entity_id: String,
    /// Stable position of the entity in the comparison set, modulo
    /// [`PALETTE_CYCLE`]. Skipped neighbors do not shift it.
    pub palette_slot: usize,
    pub points: Vec<NormalizedPoint>,
}

/// A fully prepared overlay: the shared date axis plus one normalized
/// series per plottable entity, in the order entities joined the set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonView {
    pub axis: Vec<NaiveDate>,
    pub series: Vec<NormalizedSeries>,
}

impl ComparisonView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Union of every observation date across the entries, ascending and
/// deduplicated. Entities trading on different calendars keep their own
/// points; the axis never interpolates gaps.
#[must_use]
pub fn build_shared_axis(entries: &[ComparisonEntry]) -> Vec<NaiveDate> {
    let mut axis: Vec<NaiveDate> = entries
        .iter()
        .flat_map(|entry| entry.series.iter().map(|obs| obs.date))
        .collect();
    axis.sort_unstable();
    axis.dedup();
    axis
}

/// Rebases a series so its first close reads exactly 100.00 and every
/// later close is a rounded percentage of that baseline. Returns `None`
/// for an empty series or when the baseline close is zero or non-finite,
/// so callers skip the entity instead of plotting a division artifact.
#[must_use]
pub fn normalize_series(series: &[Observation]) -> Option<Vec<NormalizedPoint>> {
    let baseline = series.first()?.close;
    if baseline == 0.0 || !baseline.is_finite() {
        return None;
    }
    let points = series
        .iter()
        .map(|obs| NormalizedPoint {
            date: obs.date,
            value: round2(obs.close / baseline * 100.0),
        })
        .collect();
    Some(points)
}

/// Normalizes every plottable entry, preserving set order in the output.
#[must_use]
pub fn normalize_comparison(entries: &[ComparisonEntry]) -> Vec<NormalizedSeries> {
    #[cfg(feature = "parallel-compare")]
    {
        entries
            .par_iter()
            .enumerate()
            .filter_map(|(slot, entry)| normalized_entry(slot, entry))
            .collect()
    }

    #[cfg(not(feature = "parallel-compare"))]
    {
        entries
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| normalized_entry(slot, entry))
            .collect()
    }
}

fn normalized_entry(slot: usize, entry: &ComparisonEntry) -> Option<NormalizedSeries> {
    normalize_series(&entry.series).map(|points| NormalizedSeries {
        entity_id: entry.entity_id.clone(),
        palette_slot: slot % PALETTE_CYCLE,
        points,
    })
}
