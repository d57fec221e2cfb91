//! Unit tests for config loading and saving.

use super::*;

#[test]
fn test_missing_file_uses_defaults_without_reset() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(&dir.path().join("absent.json"));

    assert_eq!(result.config, InvokerConfig::default());
    assert!(result.reset_reason.is_none());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = InvokerConfig {
        history_capacity: 3,
        slot_count: 4,
        macro_policy: MacroPolicy::AbortOnFailure,
    };

    save_config(&config, &path).unwrap();
    let result = load_config_from(&path);

    assert_eq!(result.config, config);
    assert!(result.reset_reason.is_none());
}

#[test]
fn test_missing_fields_take_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "history_capacity": 2 }"#).unwrap();

    let config = load_config_from(&path).config;
    assert_eq!(config.history_capacity, 2);
    assert_eq!(config.slot_count, DEFAULT_SLOT_COUNT);
    assert_eq!(config.macro_policy, MacroPolicy::RunAll);
}

#[test]
fn test_corrupted_file_resets_with_reason() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = load_config_from(&path);
    assert_eq!(result.config, InvokerConfig::default());
    let reason = result.reset_reason.unwrap();
    assert!(reason.contains("corrupted"), "unexpected reason: {reason}");
}

#[test]
fn test_zero_capacity_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "history_capacity": 0, "slot_count": 0 }"#).unwrap();

    let config = load_config_from(&path).config;
    assert_eq!(config.history_capacity, 1);
    assert_eq!(config.slot_count, 1);
}

#[test]
fn test_policy_uses_snake_case() {
    let json = serde_json::to_string(&MacroPolicy::AbortOnFailure).unwrap();
    assert_eq!(json, r#""abort_on_failure""#);
}
