use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// One OHLCV sample for an entity on a given trading day.
///
/// Observations are immutable once loaded; the store never rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub entity_id: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Observation {
    /// Builds a validated observation from raw values.
    ///
    /// Invariants:
    /// - all prices are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    ///
    /// The loader deliberately bypasses this constructor for source records:
    /// input files are kept as-is and only structurally broken records are
    /// dropped. Use [`Observation::is_well_formed`] to probe loaded data.
    pub fn new(
        entity_id: impl Into<String>,
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> DashboardResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(DashboardError::InvalidData(
                "observation prices must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(DashboardError::InvalidData(
                "observation low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(DashboardError::InvalidData(
                "observation open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            entity_id: entity_id.into(),
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Whether this observation satisfies the OHLC envelope invariant.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.low <= self.high
            && self.open >= self.low
            && self.open <= self.high
            && self.close >= self.low
            && self.close <= self.high
    }
}
