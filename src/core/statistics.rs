//! Descriptive statistics over a filtered series: the figures a dashboard
//! panel shows alongside the chart.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::observation::Observation;
use crate::core::primitives::round2;

/// A change relative to some baseline close. Degenerate baselines (absent,
/// zero, or non-finite) collapse to [`ChangeStat::NotApplicable`] rather
/// than a NaN or infinite figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeStat {
    NotApplicable,
    Change { absolute: f64, percent: f64 },
}

impl ChangeStat {
    /// Change of `current` against an optional baseline. The absolute part
    /// is left unrounded for downstream arithmetic; the percent part is
    /// rounded to two decimals like every displayed figure.
    #[must_use]
    pub fn between(current: f64, baseline: Option<f64>) -> Self {
        match baseline {
            Some(base) if base != 0.0 && base.is_finite() => {
                let absolute = current - base;
                Self::Change {
                    absolute,
                    percent: round2(absolute / base * 100.0),
                }
            }
            _ => Self::NotApplicable,
        }
    }

    #[must_use]
    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Change { .. })
    }
}

/// Summary of one entity's series over the active range.
///
/// `current`, `previous`, and `start` are raw closes; `highest`, `lowest`,
/// and `average` arrive rounded to two decimals, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub current: f64,
    pub previous: Option<f64>,
    pub start: f64,
    pub daily: ChangeStat,
    pub overall: ChangeStat,
    pub highest: f64,
    pub lowest: f64,
    pub average: f64,
}

/// Computes the panel statistics for a series, or `None` when it is empty.
///
/// A single-observation series has no previous close, so `daily` comes back
/// [`ChangeStat::NotApplicable`] while `overall` reads as a zero change.
#[must_use]
pub fn compute_statistics(series: &[Observation]) -> Option<SeriesStatistics> {
    let first = series.first()?;
    let last = series.last()?;

    let current = last.close;
    let start = first.close;
    let previous = series.len().checked_sub(2).map(|idx| series[idx].close);

    let closes = series.iter().map(|obs| obs.close);
    let highest = closes.clone().map(OrderedFloat).max()?.0;
    let lowest = closes.clone().map(OrderedFloat).min()?.0;
    let average = closes.sum::<f64>() / series.len() as f64;

    Some(SeriesStatistics {
        current,
        previous,
        start,
        daily: ChangeStat::between(current, previous),
        overall: ChangeStat::between(current, Some(start)),
        highest: round2(highest),
        lowest: round2(lowest),
        average: round2(average),
    })
}
