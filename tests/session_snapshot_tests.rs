use chrono::NaiveDate;

use stockview_rs::api::{
    DashboardEngine, DashboardEngineConfig, MemoryPreferenceStore, SESSION_SNAPSHOT_JSON_SCHEMA_V1,
    SessionState, Theme,
};
use stockview_rs::api::prefs::{PreferenceStore, THEME_KEY};
use stockview_rs::core::{ChartKind, TimeRange};

fn config() -> DashboardEngineConfig {
    DashboardEngineConfig::new(NaiveDate::from_ymd_opt(2024, 6, 14).expect("valid date"))
}

fn busy_engine() -> DashboardEngine<MemoryPreferenceStore> {
    let mut engine = DashboardEngine::with_memory_prefs(None, config());
    engine.set_time_range(TimeRange::ThreeYears);
    engine.set_chart_kind(ChartKind::Bar);
    engine.toggle_compare_mode();
    engine.select_entity("NASDAQ");
    engine.set_theme(Theme::Dark);
    engine
}

#[test]
fn session_contract_round_trips() {
    let engine = busy_engine();
    let json = engine
        .session_json_contract_v1_pretty()
        .expect("session serializes");

    let restored = SessionState::from_json_compat_str(&json).expect("contract parses");
    assert_eq!(&restored, engine.session());
}

#[test]
fn contract_envelope_carries_the_schema_version() {
    let json = busy_engine()
        .session_json_contract_v1_pretty()
        .expect("session serializes");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(SESSION_SNAPSHOT_JSON_SCHEMA_V1))
    );
    assert_eq!(value["session"]["selected_entity"].as_str(), Some("NASDAQ"));
}

#[test]
fn bare_session_payloads_still_parse() {
    let engine = busy_engine();
    let bare = serde_json::to_string(engine.session()).expect("session serializes");

    let restored = SessionState::from_json_compat_str(&bare).expect("bare payload parses");
    assert_eq!(&restored, engine.session());
}

#[test]
fn partial_bare_payloads_default_the_missing_fields() {
    let restored = SessionState::from_json_compat_str(r#"{"selected_entity": "DAX"}"#)
        .expect("partial payload parses");

    assert_eq!(restored.selected_entity.as_deref(), Some("DAX"));
    assert_eq!(restored.time_range, TimeRange::All);
    assert_eq!(restored.chart_kind, ChartKind::Line);
    assert!(!restored.compare_mode);
    assert!(restored.comparison.is_empty());
    assert_eq!(restored.theme, Theme::Light);
}

#[test]
fn unknown_schema_versions_are_rejected() {
    let payload = r#"{"schema_version": 99, "session": {}}"#;
    assert!(SessionState::from_json_compat_str(payload).is_err());
}

#[test]
fn garbage_payloads_are_rejected() {
    assert!(SessionState::from_json_compat_str("left beef").is_err());
    assert!(SessionState::from_json_compat_str("[1, 2, 3]").is_err());
}

#[test]
fn restoring_a_snapshot_replays_the_whole_session() {
    let source = busy_engine();
    let json = source
        .session_json_contract_v1_pretty()
        .expect("session serializes");

    let mut target = DashboardEngine::with_memory_prefs(None, config());
    target.restore_session_json(&json).expect("snapshot restores");

    assert_eq!(target.session(), source.session());
    assert_eq!(target.selected_entity(), Some("NASDAQ"));
    assert_eq!(target.time_range(), TimeRange::ThreeYears);
    assert!(target.compare_mode());
}

#[test]
fn restoring_persists_the_snapshot_theme() {
    let json = busy_engine()
        .session_json_contract_v1_pretty()
        .expect("session serializes");

    let mut target = DashboardEngine::with_memory_prefs(None, config());
    target.restore_session_json(&json).expect("snapshot restores");

    assert_eq!(target.theme(), Theme::Dark);
    assert_eq!(
        target.preferences().get(THEME_KEY).as_deref(),
        Some("enabled")
    );
}
