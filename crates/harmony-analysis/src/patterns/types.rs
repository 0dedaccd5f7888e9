//! Pattern summary types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Min, max and mean of a set of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl NumericRange {
    /// `None` when there are no observations: an empty set has no range.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = values.iter().sum::<f64>() / values.len() as f64;
        Some(Self { min, max, avg })
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The wider of `max - avg` and `avg - min`.
    pub fn spread(&self) -> f64 {
        (self.max - self.avg).max(self.avg - self.min)
    }
}

/// A text style observed in the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographySignature {
    pub family: String,
    pub style: String,
    pub size: f64,
}

/// Style statistics extracted from a baseline for one scan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    /// Distinct `#RRGGBB` colors.
    pub color_palette: BTreeSet<String>,
    /// `None` when no baseline node carries a numeric corner radius.
    pub corner_radius_range: Option<NumericRange>,
    /// Distinct text styles, in first-seen order.
    pub typography_styles: Vec<TypographySignature>,
    /// `None` when no baseline node supports padding.
    pub spacing_values: Option<NumericRange>,
}

impl PatternSummary {
    /// True when no baseline node contributed anything.
    pub fn is_empty(&self) -> bool {
        self.color_palette.is_empty()
            && self.corner_radius_range.is_none()
            && self.typography_styles.is_empty()
            && self.spacing_values.is_none()
    }
}
