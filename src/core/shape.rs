use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Observation;

/// How the renderer should draw a single-entity series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    /// Bar-chart stand-in for candlesticks: same geometry as `Bar`, but each
    /// point carries an up/down flag the renderer maps to candle colors.
    /// True OHLC candle geometry is not reconstructed.
    CandleApprox,
}

/// Per-point color hint for [`ChartKind::CandleApprox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleDirection {
    Up,
    Down,
}

impl CandleDirection {
    /// `Up` when the sample closed at or above its open.
    #[must_use]
    pub fn of(open: f64, close: f64) -> Self {
        if close >= open {
            CandleDirection::Up
        } else {
            CandleDirection::Down
        }
    }
}

/// One renderable sample. Carries full OHLCV so tooltips can show every
/// field regardless of chart kind; `direction` is populated only for
/// `CandleApprox`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub direction: Option<CandleDirection>,
}

/// Renderable view of one entity within the active range.
///
/// An empty `points` vector is the neutral "no data" state; callers render a
/// placeholder instead of treating it as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSeries {
    pub entity_id: String,
    pub kind: ChartKind,
    pub points: Vec<RenderPoint>,
}

impl RenderSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Shapes a filtered series for the requested chart kind.
///
/// Values pass through unchanged for every kind; the function is pure so
/// renderers and tests consume identical output.
#[must_use]
pub fn shape_series(
    entity_id: impl Into<String>,
    series: &[Observation],
    kind: ChartKind,
) -> RenderSeries {
    let wants_direction = matches!(kind, ChartKind::CandleApprox);

    let points = series
        .iter()
        .map(|obs| RenderPoint {
            date: obs.date,
            open: obs.open,
            high: obs.high,
            low: obs.low,
            close: obs.close,
            volume: obs.volume,
            direction: wants_direction.then(|| CandleDirection::of(obs.open, obs.close)),
        })
        .collect();

    RenderSeries {
        entity_id: entity_id.into(),
        kind,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_treats_flat_close_as_up() {
        assert_eq!(CandleDirection::of(10.0, 10.0), CandleDirection::Up);
        assert_eq!(CandleDirection::of(10.0, 10.01), CandleDirection::Up);
        assert_eq!(CandleDirection::of(10.0, 9.99), CandleDirection::Down);
    }
}
