//! Scoring configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLOR_WEIGHT, DEFAULT_NEUTRAL_COLOR_SCORE, DEFAULT_SHAPE_WEIGHT,
    DEFAULT_SPACING_WEIGHT, DEFAULT_TYPOGRAPHY_SIZE_TOLERANCE, DEFAULT_TYPOGRAPHY_WEIGHT,
};

/// How the target's corner radii are compared to the baseline range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapePolicy {
    /// Share of all target radii inside `[min, max]`.
    #[default]
    Strict,
    /// Radius of the largest container only, decaying with distance from
    /// the baseline average when out of range.
    Graded,
}

impl ShapePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Graded => "graded",
        }
    }
}

impl fmt::Display for ShapePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "graded" => Ok(Self::Graded),
            other => Err(format!("unknown shape policy '{other}'")),
        }
    }
}

/// Resolved category weights for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub color: f64,
    pub shape: f64,
    pub typography: f64,
    pub spacing: f64,
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.color + self.shape + self.typography + self.spacing
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR_WEIGHT,
            shape: DEFAULT_SHAPE_WEIGHT,
            typography: DEFAULT_TYPOGRAPHY_WEIGHT,
            spacing: DEFAULT_SPACING_WEIGHT,
        }
    }
}

/// Configuration for the harmony scorer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Color weight. Default: 0.30.
    pub color_weight: Option<f64>,
    /// Shape weight. Default: 0.30.
    pub shape_weight: Option<f64>,
    /// Typography weight. Default: 0.25.
    pub typography_weight: Option<f64>,
    /// Spacing weight. Default: 0.15.
    pub spacing_weight: Option<f64>,
    /// Font size difference still counted as a match. Default: 2.0.
    pub typography_size_tolerance: Option<f64>,
    /// Color score for a target without solid fills. Default: 50.
    pub neutral_color_score: Option<u32>,
    /// Corner radius comparison policy. Default: strict.
    pub shape_policy: Option<ShapePolicy>,
}

impl ScoringConfig {
    pub fn effective_weights(&self) -> CategoryWeights {
        let defaults = CategoryWeights::default();
        CategoryWeights {
            color: self.color_weight.unwrap_or(defaults.color),
            shape: self.shape_weight.unwrap_or(defaults.shape),
            typography: self.typography_weight.unwrap_or(defaults.typography),
            spacing: self.spacing_weight.unwrap_or(defaults.spacing),
        }
    }

    pub fn effective_size_tolerance(&self) -> f64 {
        self.typography_size_tolerance
            .unwrap_or(DEFAULT_TYPOGRAPHY_SIZE_TOLERANCE)
    }

    pub fn effective_neutral_color_score(&self) -> u32 {
        self.neutral_color_score.unwrap_or(DEFAULT_NEUTRAL_COLOR_SCORE)
    }

    pub fn effective_shape_policy(&self) -> ShapePolicy {
        self.shape_policy.unwrap_or_default()
    }
}
