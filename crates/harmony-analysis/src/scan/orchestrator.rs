//! Runs one scan in either direction.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use harmony_core::config::{HarmonyConfig, ScanDirection};
use harmony_core::errors::ScanError;
use harmony_core::events::{
    EventDispatcher, HarmonyEventHandler, ScanCompleteEvent, ScanFailedEvent, ScanStartedEvent,
};
use harmony_core::tracing::metrics;
use harmony_core::types::NodeId;

use super::outcome::{PatternSource, ScanOutcome};
use super::session::ScanSession;
use crate::classify::{find_components_of_type, ComponentClassifier, ComponentType};
use crate::document::DesignDocument;
use crate::patterns::{PatternExtractor, PatternSummary};
use crate::scoring::{HarmonyScore, HarmonyScorer};
use crate::traversal::is_visible;

/// Owns the classifier, scorer and event hooks used by every scan.
#[derive(Debug)]
pub struct ScanOrchestrator {
    classifier: ComponentClassifier,
    scorer: HarmonyScorer,
    events: EventDispatcher,
}

impl ScanOrchestrator {
    pub fn new(config: &HarmonyConfig) -> Self {
        Self {
            classifier: ComponentClassifier::new(),
            scorer: HarmonyScorer::new(&config.scoring),
            events: EventDispatcher::new(),
        }
    }

    pub fn with_classifier(mut self, classifier: ComponentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn register_handler(&mut self, handler: Arc<dyn HarmonyEventHandler>) {
        self.events.register(handler);
    }

    /// Run a scan for the session's selections.
    ///
    /// Missing selections and unknown node ids are errors; a baseline with
    /// no usable pattern source is a [`ScanOutcome::NoMatches`].
    pub fn run<D: DesignDocument + ?Sized>(
        &self,
        doc: &D,
        session: &ScanSession,
    ) -> Result<ScanOutcome, ScanError> {
        let (baseline, target) = session.require_selection()?;
        if doc.node(baseline).is_none() {
            return Err(ScanError::NodeNotFound {
                id: baseline.to_string(),
            });
        }
        let target_node = doc.node(target).ok_or_else(|| ScanError::NodeNotFound {
            id: target.to_string(),
        })?;

        let started = Instant::now();
        let direction = session.direction();
        let component_type = self.classifier.classify(target_node);

        self.events.emit_scan_started(&ScanStartedEvent {
            baseline_id: baseline.to_string(),
            target_id: target.to_string(),
            direction: direction.to_string(),
        });
        debug!(
            %baseline,
            %target,
            %direction,
            { metrics::COMPONENT_TYPE } = %component_type,
            "scan started"
        );

        let outcome = match direction {
            ScanDirection::ComponentMatch => {
                self.run_component_match(doc, baseline, target, component_type)
            }
            ScanDirection::Baseline => self.run_baseline(doc, baseline, target, component_type),
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        match &outcome {
            ScanOutcome::Complete { score, .. } => {
                info!(
                    { metrics::COMPONENT_TYPE } = %component_type,
                    { metrics::OVERALL_SCORE } = score.overall_score,
                    { metrics::SCAN_DURATION_MS } = duration_ms,
                    "scan complete"
                );
                self.events.emit_scan_complete(&ScanCompleteEvent {
                    component_type: component_type.to_string(),
                    overall_score: score.overall_score,
                    duration_ms,
                });
            }
            ScanOutcome::NoMatches { message, .. } => {
                info!({ metrics::COMPONENT_TYPE } = %component_type, "no pattern sources");
                self.events.emit_scan_failed(&ScanFailedEvent {
                    component_type: component_type.to_string(),
                    message: message.clone(),
                });
            }
        }

        Ok(outcome)
    }

    /// Baseline components of the target's type form one aggregate summary.
    fn run_component_match<D: DesignDocument + ?Sized>(
        &self,
        doc: &D,
        baseline: &NodeId,
        target: &NodeId,
        component_type: ComponentType,
    ) -> ScanOutcome {
        let sources: Vec<NodeId> =
            find_components_of_type(doc, baseline, component_type, &self.classifier)
                .into_iter()
                .map(|n| n.id.clone())
                .collect();
        if sources.is_empty() {
            return ScanOutcome::no_matches(component_type);
        }

        let patterns = PatternExtractor::with_events(&self.events).extract(doc, &sources);
        let score = self.scorer.score(doc, target, &patterns);
        ScanOutcome::Complete {
            component_type,
            patterns,
            score,
            source: None,
        }
    }

    /// Each visible direct child of the baseline is scored separately; the
    /// highest overall score wins and ties keep the earlier child.
    fn run_baseline<D: DesignDocument + ?Sized>(
        &self,
        doc: &D,
        baseline: &NodeId,
        target: &NodeId,
        component_type: ComponentType,
    ) -> ScanOutcome {
        let extractor = PatternExtractor::with_events(&self.events);
        let mut best: Option<(&NodeId, PatternSummary, HarmonyScore)> = None;

        for child in doc.children(baseline).iter().filter(|c| is_visible(doc, c)) {
            let patterns = extractor.extract(doc, std::slice::from_ref(child));
            let score = self.scorer.score(doc, target, &patterns);
            debug!(source = %child, overall = score.overall_score, "baseline source scored");

            let better = best
                .as_ref()
                .map_or(true, |(_, _, b)| score.overall_score > b.overall_score);
            if better {
                best = Some((child, patterns, score));
            }
        }

        match best {
            Some((id, patterns, score)) => ScanOutcome::Complete {
                component_type,
                patterns,
                score,
                source: Some(PatternSource {
                    id: id.clone(),
                    name: doc.node(id).map(|n| n.name.clone()).unwrap_or_default(),
                }),
            },
            None => ScanOutcome::no_matches(component_type),
        }
    }
}

impl Default for ScanOrchestrator {
    fn default() -> Self {
        Self::new(&HarmonyConfig::default())
    }
}
