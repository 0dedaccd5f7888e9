//! Category scorers and the weighted overall score.

use std::collections::BTreeSet;

use tracing::debug;

use harmony_core::config::{CategoryWeights, ScoringConfig, ShapePolicy};
use harmony_core::constants::{
    MAX_SCORE, PADDING_SIDES, TYPOGRAPHY_FAMILY_CREDIT, TYPOGRAPHY_SIZE_CREDIT,
    TYPOGRAPHY_STYLE_CREDIT,
};
use harmony_core::tracing::metrics;
use harmony_core::types::NodeId;

use super::types::HarmonyScore;
use crate::document::{DesignDocument, Padding, TextStyle};
use crate::patterns::{rgb_to_hex, NumericRange, PatternSummary, TypographySignature};
use crate::traversal::{collect_visible_subtree, first_text_node, largest_container};

/// Scores a target component against a [`PatternSummary`].
///
/// Pure: the same document, target and summary always give the same score.
#[derive(Debug, Clone)]
pub struct HarmonyScorer {
    weights: CategoryWeights,
    size_tolerance: f64,
    neutral_color_score: u32,
    shape_policy: ShapePolicy,
}

impl HarmonyScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            weights: config.effective_weights(),
            size_tolerance: config.effective_size_tolerance(),
            neutral_color_score: config.effective_neutral_color_score().min(MAX_SCORE),
            shape_policy: config.effective_shape_policy(),
        }
    }

    /// Score the visible subtree of `target`.
    pub fn score<D: DesignDocument + ?Sized>(
        &self,
        doc: &D,
        target: &NodeId,
        patterns: &PatternSummary,
    ) -> HarmonyScore {
        let nodes = collect_visible_subtree(doc, target);

        let colors: Vec<String> = nodes
            .iter()
            .flat_map(|n| n.fills.iter().filter_map(|p| p.solid_color()))
            .map(|c| rgb_to_hex(&c))
            .collect();
        let color_score = self.color_score(&colors, &patterns.color_palette);

        let shape_score = match self.shape_policy {
            ShapePolicy::Strict => {
                let radii: Vec<f64> = nodes.iter().filter_map(|n| n.corner_radius).collect();
                Self::shape_score_strict(&radii, patterns.corner_radius_range.as_ref())
            }
            ShapePolicy::Graded => {
                let radius = largest_container(doc, target).and_then(|n| n.corner_radius);
                Self::shape_score_graded(radius, patterns.corner_radius_range.as_ref())
            }
        };

        // A font that fails to resolve scores like a missing text node.
        let text_style = first_text_node(doc, target).and_then(|n| {
            doc.resolve_text_style(&n.id)
                .map_err(|e| debug!(node = %n.id, error = %e, "target font unresolved"))
                .ok()
        });
        let typography_score =
            self.typography_score(text_style.as_ref(), &patterns.typography_styles);

        let padding = nodes.first().and_then(|n| n.padding);
        let spacing_score = Self::spacing_score(padding.as_ref(), patterns.spacing_values.as_ref());

        let score = self.combine(color_score, shape_score, typography_score, spacing_score);
        debug!(
            target = %target,
            color = score.color_score,
            shape = score.shape_score,
            typography = score.typography_score,
            spacing = score.spacing_score,
            { metrics::OVERALL_SCORE } = score.overall_score,
            "target scored"
        );
        score
    }

    /// Assemble a [`HarmonyScore`] from category scores.
    pub fn combine(&self, color: u32, shape: u32, typography: u32, spacing: u32) -> HarmonyScore {
        HarmonyScore {
            color_score: color,
            shape_score: shape,
            typography_score: typography,
            spacing_score: spacing,
            overall_score: self.overall(color, shape, typography, spacing),
        }
    }

    /// `round(w_c·color + w_s·shape + w_t·typography + w_p·spacing)`.
    pub fn overall(&self, color: u32, shape: u32, typography: u32, spacing: u32) -> u32 {
        let w = &self.weights;
        to_score(
            w.color * f64::from(color)
                + w.shape * f64::from(shape)
                + w.typography * f64::from(typography)
                + w.spacing * f64::from(spacing),
        )
    }

    /// Share of target colors (counted with multiplicity) found in the
    /// palette. A target without colors gets the neutral score.
    pub fn color_score(&self, colors: &[String], palette: &BTreeSet<String>) -> u32 {
        if colors.is_empty() {
            return self.neutral_color_score;
        }
        let matching = colors.iter().filter(|c| palette.contains(*c)).count();
        ratio_score(matching, colors.len())
    }

    /// Share of target radii inside the baseline range. No target radii,
    /// or no baseline radius data, scores 0.
    pub fn shape_score_strict(radii: &[f64], range: Option<&NumericRange>) -> u32 {
        let Some(range) = range else {
            return 0;
        };
        if radii.is_empty() {
            return 0;
        }
        let in_range = radii.iter().filter(|r| range.contains(**r)).count();
        ratio_score(in_range, radii.len())
    }

    /// 100 inside the range; outside, decays linearly with the distance from
    /// the baseline mean measured in spreads, reaching 0 at two spreads.
    pub fn shape_score_graded(radius: Option<f64>, range: Option<&NumericRange>) -> u32 {
        let (Some(radius), Some(range)) = (radius, range) else {
            return 0;
        };
        if range.contains(radius) {
            return MAX_SCORE;
        }
        let spread = range.spread();
        if spread <= 0.0 {
            return 0;
        }
        let deviation = (radius - range.avg).abs() / spread;
        to_score(100.0 * (1.0 - deviation / 2.0))
    }

    /// Gated credit: family, then style among family matches, then size
    /// among style matches.
    pub fn typography_score(&self, target: Option<&TextStyle>, styles: &[TypographySignature]) -> u32 {
        let Some(target) = target else {
            return 0;
        };

        let family: Vec<&TypographySignature> =
            styles.iter().filter(|s| s.family == target.family).collect();
        if family.is_empty() {
            return 0;
        }
        let mut score = TYPOGRAPHY_FAMILY_CREDIT;

        let style: Vec<&TypographySignature> =
            family.into_iter().filter(|s| s.style == target.style).collect();
        if style.is_empty() {
            return score;
        }
        score += TYPOGRAPHY_STYLE_CREDIT;

        if style
            .iter()
            .any(|s| (s.size - target.size).abs() <= self.size_tolerance)
        {
            score += TYPOGRAPHY_SIZE_CREDIT;
        }
        score
    }

    /// Share of the four padding values inside the baseline range. A target
    /// without padding, or no baseline spacing data, scores 0.
    pub fn spacing_score(padding: Option<&Padding>, range: Option<&NumericRange>) -> u32 {
        let (Some(padding), Some(range)) = (padding, range) else {
            return 0;
        };
        let in_range = padding.values().iter().filter(|v| range.contains(**v)).count();
        ratio_score(in_range, PADDING_SIDES)
    }
}

impl Default for HarmonyScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

fn ratio_score(matching: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    to_score(100.0 * matching as f64 / total as f64)
}

fn to_score(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(MAX_SCORE)) as u32
}
