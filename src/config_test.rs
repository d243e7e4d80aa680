#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn default_matches_editor_constants() {
    let cfg = NavigationConfig::default();
    assert_eq!(cfg.zoom_step, 0.01);
    assert_eq!(cfg.min_scale, 0.000_01);
    assert_eq!(cfg.max_scale, 10_000.0);
    assert_eq!(cfg.focus_pivot_side, 10.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_lookup_without_keys_is_default() {
    let cfg = NavigationConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(cfg, NavigationConfig::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = NavigationConfig::from_lookup(lookup(&[
        (ENV_ZOOM_STEP, "0.02"),
        (ENV_MIN_SCALE, "0.1"),
        (ENV_MAX_SCALE, " 8 "),
        (ENV_FOCUS_PIVOT_SIZE, "12"),
    ]))
    .expect("config");
    assert_eq!(cfg.zoom_step, 0.02);
    assert_eq!(cfg.min_scale, 0.1);
    assert_eq!(cfg.max_scale, 8.0);
    assert_eq!(cfg.focus_pivot_side, 12.0);
}

#[test]
fn from_lookup_rejects_non_numeric() {
    let err = NavigationConfig::from_lookup(lookup(&[(ENV_ZOOM_STEP, "fast")])).expect_err("should fail");
    assert_eq!(err, ConfigError::InvalidNumber { var: ENV_ZOOM_STEP.to_string(), value: "fast".to_string() });
}

#[test]
fn from_lookup_rejects_non_finite() {
    let err = NavigationConfig::from_lookup(lookup(&[(ENV_MAX_SCALE, "inf")])).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidNumber { .. }));
}

#[test]
fn validate_rejects_scale_below_hard_floor() {
    let cfg = NavigationConfig { min_scale: 0.000_001, ..NavigationConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::ScaleOutOfRange { name: "min scale", value: 0.000_001 }));
}

#[test]
fn validate_rejects_scale_above_hard_ceiling() {
    let cfg = NavigationConfig { max_scale: 20_000.0, ..NavigationConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::ScaleOutOfRange { name: "max scale", value: 20_000.0 }));
}

#[test]
fn validate_rejects_inverted_bounds() {
    let cfg = NavigationConfig { min_scale: 5.0, max_scale: 2.0, ..NavigationConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::InvertedScaleBounds { min: 5.0, max: 2.0 }));
}

#[test]
fn validate_rejects_non_positive_zoom_step() {
    let cfg = NavigationConfig { zoom_step: 0.0, ..NavigationConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::NotPositive { name: "zoom step", .. })));
}

#[test]
fn validate_rejects_negative_pivot_size() {
    let cfg = NavigationConfig { focus_pivot_side: -1.0, ..NavigationConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::NotPositive { name: "focus pivot size", .. })));
}

#[test]
fn error_messages_name_the_variable() {
    let err = ConfigError::InvalidNumber { var: ENV_MIN_SCALE.to_string(), value: "x".to_string() };
    assert_eq!(err.to_string(), "invalid number for EDITOR_MIN_SCALE: \"x\"");
}
