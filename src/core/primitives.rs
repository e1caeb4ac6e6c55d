use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{DashboardError, DashboardResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> DashboardResult<f64> {
    value.to_f64().ok_or_else(|| {
        DashboardError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Rounds to two decimal places, half away from zero. Every percentage and
/// summary value surfaced to a dashboard goes through this.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_half_rounds_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(103.0), 103.0);
        assert_eq!(round2(1.0 / 3.0), 0.33);
    }
}
