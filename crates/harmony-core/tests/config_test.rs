//! Tests for the Harmony configuration system.

use std::sync::Mutex;

use harmony_core::config::{CliOverrides, HarmonyConfig, ScanDirection, ShapePolicy};
use harmony_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const HARMONY_ENV_VARS: [&str; 8] = [
    "HARMONY_SCORING_COLOR_WEIGHT",
    "HARMONY_SCORING_SHAPE_WEIGHT",
    "HARMONY_SCORING_TYPOGRAPHY_WEIGHT",
    "HARMONY_SCORING_SPACING_WEIGHT",
    "HARMONY_SCORING_TYPOGRAPHY_SIZE_TOLERANCE",
    "HARMONY_SCORING_NEUTRAL_COLOR_SCORE",
    "HARMONY_SCORING_SHAPE_POLICY",
    "HARMONY_SCAN_DIRECTION",
];

fn clear_harmony_env_vars() {
    for key in HARMONY_ENV_VARS {
        std::env::remove_var(key);
    }
}

/// Creates a project dir and points HOME at an empty dir so no user
/// config leaks into the test.
fn isolated_dirs() -> (tempfile::TempDir, tempfile::TempDir) {
    let project = tempfile::TempDir::new().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", home.path());
    (project, home)
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_harmony_env_vars();
    let (project, home) = isolated_dirs();

    std::fs::create_dir_all(home.path().join(".harmony")).unwrap();
    std::fs::write(
        home.path().join(".harmony").join("config.toml"),
        r#"
[scoring]
typography_size_tolerance = 4.0
neutral_color_score = 40
"#,
    )
    .unwrap();

    std::fs::write(
        project.path().join("harmony.toml"),
        r#"
[scoring]
neutral_color_score = 60
shape_policy = "graded"

[scan]
direction = "baseline"
"#,
    )
    .unwrap();

    std::env::set_var("HARMONY_SCORING_SHAPE_POLICY", "strict");

    let cli = CliOverrides {
        direction: Some(ScanDirection::ComponentMatch),
        ..Default::default()
    };
    let config = HarmonyConfig::load(project.path(), Some(&cli)).unwrap();

    // User layer survives where nothing overrides it.
    assert_eq!(config.scoring.effective_size_tolerance(), 4.0);
    // Project overrides user.
    assert_eq!(config.scoring.effective_neutral_color_score(), 60);
    // Env overrides project.
    assert_eq!(config.scoring.effective_shape_policy(), ShapePolicy::Strict);
    // CLI overrides project.
    assert_eq!(config.scan.effective_direction(), ScanDirection::ComponentMatch);

    clear_harmony_env_vars();
}

#[test]
fn test_load_without_files_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_harmony_env_vars();
    let (project, _home) = isolated_dirs();

    let config = HarmonyConfig::load(project.path(), None).unwrap();
    let weights = config.scoring.effective_weights();
    assert_eq!(weights.color, 0.30);
    assert_eq!(weights.shape, 0.30);
    assert_eq!(weights.typography, 0.25);
    assert_eq!(weights.spacing, 0.15);
    assert_eq!(config.scoring.effective_size_tolerance(), 2.0);
    assert_eq!(config.scoring.effective_neutral_color_score(), 50);
    assert_eq!(config.scoring.effective_shape_policy(), ShapePolicy::Strict);
    assert_eq!(config.scan.effective_direction(), ScanDirection::ComponentMatch);
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_harmony_env_vars();
    let (project, _home) = isolated_dirs();

    std::env::set_var("HARMONY_SCAN_DIRECTION", "sideways");
    std::env::set_var("HARMONY_SCORING_NEUTRAL_COLOR_SCORE", "lots");

    let config = HarmonyConfig::load(project.path(), None).unwrap();
    assert_eq!(config.scan.direction, None);
    assert_eq!(config.scoring.neutral_color_score, None);

    clear_harmony_env_vars();
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_harmony_env_vars();
    let (project, _home) = isolated_dirs();

    std::fs::write(project.path().join("harmony.toml"), "not valid toml {{{{").unwrap();

    match HarmonyConfig::load(project.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_weights_must_sum_to_one() {
    let config = HarmonyConfig::from_toml(
        r#"
[scoring]
color_weight = 0.5
shape_weight = 0.5
typography_weight = 0.5
spacing_weight = 0.5
"#,
    )
    .unwrap();

    match HarmonyConfig::validate(&config) {
        Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, "scoring"),
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_out_of_range_values_rejected() {
    let weight = HarmonyConfig::from_toml("[scoring]\ncolor_weight = 1.5\n").unwrap();
    assert!(matches!(
        HarmonyConfig::validate(&weight),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "scoring.color_weight"
    ));

    let neutral = HarmonyConfig::from_toml("[scoring]\nneutral_color_score = 120\n").unwrap();
    assert!(HarmonyConfig::validate(&neutral).is_err());

    let tolerance =
        HarmonyConfig::from_toml("[scoring]\ntypography_size_tolerance = -1.0\n").unwrap();
    assert!(HarmonyConfig::validate(&tolerance).is_err());
}

#[test]
fn test_rebalanced_weights_accepted() {
    let config = HarmonyConfig::from_toml(
        r#"
[scoring]
color_weight = 0.25
shape_weight = 0.25
typography_weight = 0.25
spacing_weight = 0.25
"#,
    )
    .unwrap();
    assert!(HarmonyConfig::validate(&config).is_ok());
}

#[test]
fn test_unknown_keys_ignored() {
    let config = HarmonyConfig::from_toml(
        r#"
[scoring]
shape_policy = "graded"
future_option = true

[export]
preview = "png"
"#,
    )
    .unwrap();
    assert_eq!(config.scoring.effective_shape_policy(), ShapePolicy::Graded);
}

#[test]
fn test_toml_roundtrip_preserves_values() {
    let mut config = HarmonyConfig::default();
    config.scoring.shape_policy = Some(ShapePolicy::Graded);
    config.scan.direction = Some(ScanDirection::Baseline);

    let text = config.to_toml().unwrap();
    let parsed = HarmonyConfig::from_toml(&text).unwrap();
    assert_eq!(parsed.scoring.shape_policy, Some(ShapePolicy::Graded));
    assert_eq!(parsed.scan.direction, Some(ScanDirection::Baseline));
}
