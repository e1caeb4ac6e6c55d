use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::Observation;

/// Calendar window applied to a series before display or statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    OneYear,
    ThreeYears,
    #[default]
    All,
}

impl TimeRange {
    /// Inclusive lower bound for this range, or `None` when unbounded.
    ///
    /// Year subtraction is calendar-based, not a fixed day count: one year
    /// before 2024-02-29 is 2023-02-28 (chrono clamps to the month end).
    #[must_use]
    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        let years = match self {
            TimeRange::OneYear => 1,
            TimeRange::ThreeYears => 3,
            TimeRange::All => return None,
        };

        Some(
            today
                .checked_sub_months(Months::new(12 * years))
                .unwrap_or(NaiveDate::MIN),
        )
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::OneYear => "1Y",
            TimeRange::ThreeYears => "3Y",
            TimeRange::All => "All",
        }
    }
}

/// Narrows a single-entity series to the active range.
///
/// The copy is re-sorted ascending by date (stable, so duplicate dates keep
/// their relative order) before the inclusive cutoff is applied. `All` is
/// the identity on sorted input, and filtering an already-filtered series by
/// the same range is a no-op.
#[must_use]
pub fn filter_series_by_range(
    series: &[Observation],
    range: TimeRange,
    today: NaiveDate,
) -> Vec<Observation> {
    let mut filtered: Vec<Observation> = series.to_vec();
    filtered.sort_by_key(|obs| obs.date);

    if let Some(cutoff) = range.cutoff(today) {
        filtered.retain(|obs| obs.date >= cutoff);
    }

    filtered
}
