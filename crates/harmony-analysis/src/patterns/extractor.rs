//! Walks baseline subtrees and aggregates their style attributes.

use std::collections::BTreeSet;

use tracing::debug;

use harmony_core::events::{EventDispatcher, FontSkippedEvent, PatternsExtractedEvent};
use harmony_core::tracing::metrics;
use harmony_core::types::collections::FxHashSet;
use harmony_core::types::NodeId;

use super::color::rgb_to_hex;
use super::types::{NumericRange, PatternSummary, TypographySignature};
use crate::document::{DesignDocument, Node};
use crate::traversal::collect_visible_subtree;

/// Raw observations before summarizing. Colors and typography use set
/// semantics; radii and spacing keep multiplicities.
#[derive(Debug, Default)]
struct Observations {
    colors: BTreeSet<String>,
    radii: Vec<f64>,
    typography: Vec<TypographySignature>,
    typography_keys: FxHashSet<(String, String, u64)>,
    spacing: Vec<f64>,
    fonts_skipped: usize,
}

impl Observations {
    fn into_summary(self) -> PatternSummary {
        PatternSummary {
            color_palette: self.colors,
            corner_radius_range: NumericRange::from_values(&self.radii),
            typography_styles: self.typography,
            spacing_values: NumericRange::from_values(&self.spacing),
        }
    }
}

/// Extracts a [`PatternSummary`] from a set of baseline roots.
#[derive(Debug, Default)]
pub struct PatternExtractor<'e> {
    events: Option<&'e EventDispatcher>,
}

impl<'e> PatternExtractor<'e> {
    pub fn new() -> Self {
        Self { events: None }
    }

    /// Report skipped fonts and extraction totals to `events`.
    pub fn with_events(events: &'e EventDispatcher) -> Self {
        Self {
            events: Some(events),
        }
    }

    /// Aggregate the visible subtrees of `roots`. A node reachable from
    /// more than one root is counted once.
    pub fn extract<D: DesignDocument + ?Sized>(&self, doc: &D, roots: &[NodeId]) -> PatternSummary {
        let mut seen: FxHashSet<&NodeId> = FxHashSet::default();
        let mut obs = Observations::default();
        let mut visited = 0usize;

        for root in roots {
            for node in collect_visible_subtree(doc, root) {
                if !seen.insert(&node.id) {
                    continue;
                }
                visited += 1;
                self.observe(doc, node, &mut obs);
            }
        }

        debug!(
            { metrics::PATTERN_SOURCES } = roots.len(),
            { metrics::NODES_VISITED } = visited,
            { metrics::FONTS_SKIPPED } = obs.fonts_skipped,
            "patterns extracted"
        );

        if let Some(events) = self.events {
            events.emit_patterns_extracted(&PatternsExtractedEvent {
                source_count: roots.len(),
                colors: obs.colors.len(),
                radii: obs.radii.len(),
                typography_styles: obs.typography.len(),
                spacing_values: obs.spacing.len(),
            });
        }

        obs.into_summary()
    }

    fn observe<D: DesignDocument + ?Sized>(&self, doc: &D, node: &Node, obs: &mut Observations) {
        for color in node.fills.iter().filter_map(|p| p.solid_color()) {
            obs.colors.insert(rgb_to_hex(&color));
        }

        if let Some(radius) = node.corner_radius {
            obs.radii.push(radius);
        }

        if node.is_text() {
            match doc.resolve_text_style(&node.id) {
                Ok(style) => {
                    let key = (style.family.clone(), style.style.clone(), style.size.to_bits());
                    if obs.typography_keys.insert(key) {
                        obs.typography.push(TypographySignature {
                            family: style.family,
                            style: style.style,
                            size: style.size,
                        });
                    }
                }
                Err(e) => {
                    debug!(node = %node.id, error = %e, "skipping typography for node");
                    obs.fonts_skipped += 1;
                    if let Some(events) = self.events {
                        events.emit_font_skipped(&FontSkippedEvent {
                            node_id: node.id.to_string(),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        if let Some(padding) = node.padding {
            obs.spacing.extend(padding.values());
        }
    }
}
