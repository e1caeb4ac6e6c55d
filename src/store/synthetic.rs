//! Seeded demo dataset: about five years of weekday observations for a
//! handful of well-known indices, produced by a bounded random walk.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::core::Observation;

/// Entities present in every generated dataset.
pub const DEMO_ENTITIES: [&str; 6] = [
    "S&P 500",
    "NASDAQ",
    "Dow Jones",
    "FTSE 100",
    "Nikkei 225",
    "DAX",
];

// The first two entities get a small daily drift so demo charts trend
// instead of drifting sideways.
const DRIFTING_ENTITIES: [&str; 2] = ["S&P 500", "NASDAQ"];
const DAILY_DRIFT: f64 = 1.0002;

const SPAN_DAYS: u64 = 5 * 365;
const VOLUME_CEILING: u64 = 10_000_000;

/// Generates the demo dataset ending at `today`. Saturdays and Sundays are
/// skipped. The same `(today, seed)` pair always yields the same
/// observations.
#[must_use]
pub fn demo_observations(today: NaiveDate, seed: u64) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut observations = Vec::new();

    for entity in DEMO_ENTITIES {
        let mut close = 1000.0 + rng.gen_range(0.0..2000.0);
        let drifts = DRIFTING_ENTITIES.contains(&entity);

        for offset in (0..=SPAN_DAYS).rev() {
            let Some(date) = today.checked_sub_days(Days::new(offset)) else {
                continue;
            };
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                continue;
            }

            close *= 1.0 + rng.gen_range(-0.02..0.02);
            if drifts {
                close *= DAILY_DRIFT;
            }

            let open = close * (1.0 + rng.gen_range(-0.005..0.005));
            let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
            let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));

            observations.push(Observation {
                entity_id: entity.to_owned(),
                date,
                open,
                high,
                low,
                close,
                volume: rng.gen_range(0..VOLUME_CEILING),
            });
        }
    }

    debug!(
        entities = DEMO_ENTITIES.len(),
        count = observations.len(),
        "generated demo dataset"
    );
    observations
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};

    use super::demo_observations;

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let a = demo_observations(today, 42);
        let b = demo_observations(today, 42);
        assert_eq!(a, b);
        let c = demo_observations(today, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn generated_observations_are_well_formed_weekdays() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        for obs in demo_observations(today, 7) {
            assert!(obs.is_well_formed(), "bad observation: {obs:?}");
            assert!(!matches!(obs.date.weekday(), Weekday::Sat | Weekday::Sun));
        }
    }
}
