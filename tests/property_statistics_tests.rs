use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use stockview_rs::core::{ChangeStat, Observation, compute_statistics};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 14).expect("valid date")
}

fn obs(day_offset: u64, close: f64) -> Observation {
    let date = base_date()
        .checked_sub_days(Days::new(day_offset))
        .expect("date in range");
    Observation {
        entity_id: "ACME".to_owned(),
        date,
        open: close,
        high: close,
        low: close,
        close,
        volume: 0,
    }
}

/// Mirrors the display rounding so the suite catches accidental changes
/// to the published contract.
fn round2_contract(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn series_strategy() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec(0.01f64..50_000.0, 1..64).prop_map(|closes| {
        let len = closes.len() as u64;
        closes
            .into_iter()
            .enumerate()
            .map(|(i, close)| obs(len - i as u64, close))
            .collect()
    })
}

proptest! {
    #[test]
    fn summary_tracks_the_raw_series(series in series_strategy()) {
        let stats = compute_statistics(&series).expect("non-empty series");

        prop_assert_eq!(stats.current, series.last().expect("non-empty").close);
        prop_assert_eq!(stats.start, series.first().expect("non-empty").close);
        if series.len() >= 2 {
            prop_assert_eq!(stats.previous, Some(series[series.len() - 2].close));
        } else {
            prop_assert_eq!(stats.previous, None);
        }

        prop_assert!(stats.lowest <= stats.highest);
        // The three figures are rounded independently, so the average can
        // sit up to one cent outside the rounded extremes.
        prop_assert!(stats.lowest - 0.011 <= stats.average);
        prop_assert!(stats.average <= stats.highest + 0.011);

        // Positive closes keep every baseline usable.
        prop_assert_eq!(stats.daily.is_applicable(), series.len() >= 2);
        prop_assert!(stats.overall.is_applicable());
    }

    #[test]
    fn change_figures_mirror_the_close_deltas(series in series_strategy()) {
        prop_assume!(series.len() >= 2);
        let stats = compute_statistics(&series).expect("non-empty series");

        let current = series.last().expect("non-empty").close;
        let previous = series[series.len() - 2].close;
        let start = series[0].close;

        match stats.daily {
            ChangeStat::Change { absolute, percent } => {
                prop_assert_eq!(absolute, current - previous);
                prop_assert_eq!(percent, round2_contract(absolute / previous * 100.0));
            }
            ChangeStat::NotApplicable => prop_assert!(false, "daily change must be applicable"),
        }
        match stats.overall {
            ChangeStat::Change { absolute, percent } => {
                prop_assert_eq!(absolute, current - start);
                prop_assert_eq!(percent, round2_contract(absolute / start * 100.0));
            }
            ChangeStat::NotApplicable => prop_assert!(false, "overall change must be applicable"),
        }
    }

    #[test]
    fn extremes_and_average_follow_the_rounding_contract(series in series_strategy()) {
        let stats = compute_statistics(&series).expect("non-empty series");

        let raw_high = series.iter().map(|o| o.close).fold(f64::MIN, f64::max);
        let raw_low = series.iter().map(|o| o.close).fold(f64::MAX, f64::min);
        let raw_avg = series.iter().map(|o| o.close).sum::<f64>() / series.len() as f64;

        prop_assert_eq!(stats.highest, round2_contract(raw_high));
        prop_assert_eq!(stats.lowest, round2_contract(raw_low));
        prop_assert_eq!(stats.average, round2_contract(raw_avg));
    }

    #[test]
    fn single_point_series_reads_as_zero_overall_change(close in 0.01f64..50_000.0) {
        let stats = compute_statistics(&[obs(0, close)]).expect("non-empty series");

        prop_assert_eq!(stats.daily, ChangeStat::NotApplicable);
        prop_assert_eq!(
            stats.overall,
            ChangeStat::Change {
                absolute: 0.0,
                percent: 0.0,
            }
        );
        prop_assert_eq!(stats.current, close);
        prop_assert_eq!(stats.previous, None);
    }
}
