//! Shared constants for the Harmony scoring engine.

// ---- Category Weights ----

/// Default weight of the color category in the overall score.
pub const DEFAULT_COLOR_WEIGHT: f64 = 0.30;

/// Default weight of the shape (corner radius) category.
pub const DEFAULT_SHAPE_WEIGHT: f64 = 0.30;

/// Default weight of the typography category.
pub const DEFAULT_TYPOGRAPHY_WEIGHT: f64 = 0.25;

/// Default weight of the spacing (padding) category.
pub const DEFAULT_SPACING_WEIGHT: f64 = 0.15;

/// Allowed deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

// ---- Category Scoring ----

/// Color score when the target carries no solid fills.
pub const DEFAULT_NEUTRAL_COLOR_SCORE: u32 = 50;

/// Font size difference still counted as a size match.
pub const DEFAULT_TYPOGRAPHY_SIZE_TOLERANCE: f64 = 2.0;

/// Typography credit for a matching font family.
pub const TYPOGRAPHY_FAMILY_CREDIT: u32 = 60;

/// Additional typography credit for a matching font style.
pub const TYPOGRAPHY_STYLE_CREDIT: u32 = 20;

/// Additional typography credit for a matching font size.
pub const TYPOGRAPHY_SIZE_CREDIT: u32 = 20;

/// Upper bound of every score.
pub const MAX_SCORE: u32 = 100;

/// Number of padding sides on a node.
pub const PADDING_SIDES: usize = 4;

// ---- Environment ----

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "HARMONY_LOG";

/// Log filter used when `HARMONY_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "harmony=info";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "harmony.toml";
