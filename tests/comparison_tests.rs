use chrono::NaiveDate;

use stockview_rs::core::{
    ComparisonEntry, Observation, PALETTE_CYCLE, build_shared_axis, normalize_comparison,
    normalize_series,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn obs(date: NaiveDate, close: f64) -> Observation {
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

fn series(closes: &[(NaiveDate, f64)]) -> Vec<Observation> {
    closes.iter().map(|&(date, close)| obs(date, close)).collect()
}

#[test]
fn shared_axis_is_the_sorted_union_of_all_dates() {
    let d1 = day(2024, 1, 2);
    let d2 = day(2024, 1, 3);
    let d3 = day(2024, 1, 4);

    let entries = vec![
        ComparisonEntry::new("A", series(&[(d1, 1.0), (d3, 2.0)])),
        ComparisonEntry::new("B", series(&[(d2, 3.0), (d3, 4.0)])),
    ];

    assert_eq!(build_shared_axis(&entries), vec![d1, d2, d3]);
}

#[test]
fn shared_axis_of_no_entries_is_empty() {
    assert!(build_shared_axis(&[]).is_empty());
}

#[test]
fn normalization_starts_every_series_at_exactly_100() {
    let s = series(&[(day(2024, 1, 2), 37.21), (day(2024, 1, 3), 38.0)]);
    let points = normalize_series(&s).expect("non-empty series");
    assert_eq!(points[0].value, 100.0);
}

#[test]
fn entities_doubling_from_different_baselines_meet_at_200() {
    let d1 = day(2024, 1, 2);
    let d2 = day(2024, 1, 3);
    let d3 = day(2024, 1, 4);

    let entries = vec![
        ComparisonEntry::new("A", series(&[(d1, 50.0), (d2, 75.0), (d3, 100.0)])),
        ComparisonEntry::new("B", series(&[(d1, 200.0), (d2, 300.0), (d3, 400.0)])),
    ];

    let normalized = normalize_comparison(&entries);
    assert_eq!(normalized.len(), 2);
    for ns in &normalized {
        let values: Vec<f64> = ns.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![100.0, 150.0, 200.0]);
    }
}

#[test]
fn normalized_values_are_rounded_to_two_decimals() {
    let s = series(&[(day(2024, 1, 2), 3.0), (day(2024, 1, 3), 1.0)]);
    let points = normalize_series(&s).expect("non-empty series");
    // 1/3 of the baseline reads 33.33, not 33.333...
    assert_eq!(points[1].value, 33.33);
}

#[test]
fn empty_series_normalizes_to_none() {
    assert!(normalize_series(&[]).is_none());
}

#[test]
fn zero_baseline_normalizes_to_none() {
    let s = series(&[(day(2024, 1, 2), 0.0), (day(2024, 1, 3), 10.0)]);
    assert!(normalize_series(&s).is_none());
}

#[test]
fn output_keeps_the_order_entities_joined_the_set() {
    let d1 = day(2024, 1, 2);
    let entries = vec![
        ComparisonEntry::new("Zeta", series(&[(d1, 5.0)])),
        ComparisonEntry::new("Alpha", series(&[(d1, 9.0)])),
    ];

    let normalized = normalize_comparison(&entries);
    let ids: Vec<&str> = normalized.iter().map(|ns| ns.entity_id.as_str()).collect();
    assert_eq!(ids, vec!["Zeta", "Alpha"]);
}

#[test]
fn skipped_entities_do_not_shift_their_neighbors_palette_slots() {
    let d1 = day(2024, 1, 2);
    let entries = vec![
        ComparisonEntry::new("A", series(&[(d1, 5.0)])),
        ComparisonEntry::new("B", Vec::new()),
        ComparisonEntry::new("C", series(&[(d1, 9.0)])),
    ];

    let normalized = normalize_comparison(&entries);
    assert_eq!(normalized.len(), 2);
    assert_eq!(normalized[0].entity_id, "A");
    assert_eq!(normalized[0].palette_slot, 0);
    assert_eq!(normalized[1].entity_id, "C");
    assert_eq!(normalized[1].palette_slot, 2);
}

#[test]
fn palette_slots_wrap_after_the_cycle() {
    let d1 = day(2024, 1, 2);
    let entries: Vec<ComparisonEntry> = (0..PALETTE_CYCLE + 1)
        .map(|i| ComparisonEntry::new(format!("E{i}"), series(&[(d1, 1.0 + i as f64)])))
        .collect();

    let normalized = normalize_comparison(&entries);
    assert_eq!(normalized[PALETTE_CYCLE].palette_slot, 0);
    assert_eq!(normalized[1].palette_slot, 1);
}
