//! Top-level Harmony configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ScanConfig, ScanDirection, ScoringConfig, ShapePolicy};
use crate::constants::{MAX_SCORE, PROJECT_CONFIG_FILE, WEIGHT_SUM_EPSILON};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`HARMONY_*`)
/// 3. Project config (`harmony.toml` in project root)
/// 4. User config (`~/.harmony/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarmonyConfig {
    pub scoring: ScoringConfig,
    pub scan: ScanConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub direction: Option<ScanDirection>,
    pub shape_policy: Option<ShapePolicy>,
}

impl HarmonyConfig {
    /// Load configuration from every layer rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &HarmonyConfig) -> Result<(), ConfigError> {
        let scoring = &config.scoring;
        let weights = [
            ("scoring.color_weight", scoring.color_weight),
            ("scoring.shape_weight", scoring.shape_weight),
            ("scoring.typography_weight", scoring.typography_weight),
            ("scoring.spacing_weight", scoring.spacing_weight),
        ];
        for (field, weight) in weights {
            if let Some(w) = weight {
                if !(0.0..=1.0).contains(&w) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }

        let sum = scoring.effective_weights().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::ValidationFailed {
                field: "scoring".to_string(),
                message: format!("category weights must sum to 1.0, got {sum}"),
            });
        }

        if let Some(tolerance) = scoring.typography_size_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.typography_size_tolerance".to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }

        if let Some(neutral) = scoring.neutral_color_score {
            if neutral > MAX_SCORE {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.neutral_color_score".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the user config path: `~/.harmony/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".harmony").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut HarmonyConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HarmonyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut HarmonyConfig, other: &HarmonyConfig) {
        let (b, o) = (&mut base.scoring, &other.scoring);
        if o.color_weight.is_some() {
            b.color_weight = o.color_weight;
        }
        if o.shape_weight.is_some() {
            b.shape_weight = o.shape_weight;
        }
        if o.typography_weight.is_some() {
            b.typography_weight = o.typography_weight;
        }
        if o.spacing_weight.is_some() {
            b.spacing_weight = o.spacing_weight;
        }
        if o.typography_size_tolerance.is_some() {
            b.typography_size_tolerance = o.typography_size_tolerance;
        }
        if o.neutral_color_score.is_some() {
            b.neutral_color_score = o.neutral_color_score;
        }
        if o.shape_policy.is_some() {
            b.shape_policy = o.shape_policy;
        }

        if other.scan.direction.is_some() {
            base.scan.direction = other.scan.direction;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HARMONY_SCORING_SHAPE_POLICY`, `HARMONY_SCAN_DIRECTION`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut HarmonyConfig) {
        let scoring = &mut config.scoring;
        for (key, slot) in [
            ("HARMONY_SCORING_COLOR_WEIGHT", &mut scoring.color_weight),
            ("HARMONY_SCORING_SHAPE_WEIGHT", &mut scoring.shape_weight),
            ("HARMONY_SCORING_TYPOGRAPHY_WEIGHT", &mut scoring.typography_weight),
            ("HARMONY_SCORING_SPACING_WEIGHT", &mut scoring.spacing_weight),
            (
                "HARMONY_SCORING_TYPOGRAPHY_SIZE_TOLERANCE",
                &mut scoring.typography_size_tolerance,
            ),
        ] {
            if let Some(v) = env_parse::<f64>(key) {
                *slot = Some(v);
            }
        }
        if let Some(v) = env_parse::<u32>("HARMONY_SCORING_NEUTRAL_COLOR_SCORE") {
            scoring.neutral_color_score = Some(v);
        }
        if let Some(v) = env_parse::<ShapePolicy>("HARMONY_SCORING_SHAPE_POLICY") {
            scoring.shape_policy = Some(v);
        }
        if let Some(v) = env_parse::<ScanDirection>("HARMONY_SCAN_DIRECTION") {
            config.scan.direction = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut HarmonyConfig, cli: &CliOverrides) {
        if let Some(v) = cli.direction {
            config.scan.direction = Some(v);
        }
        if let Some(v) = cli.shape_policy {
            config.scoring.shape_policy = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
