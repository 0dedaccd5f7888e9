//! Rule-driven node classifier.

use harmony_core::types::NodeId;

use super::rules::{default_rules, ComponentRule};
use super::types::ComponentType;
use crate::document::{DesignDocument, Node};
use crate::traversal::collect_visible_subtree;

/// Classifies nodes by the first matching rule.
#[derive(Debug, Clone)]
pub struct ComponentClassifier {
    rules: Vec<ComponentRule>,
}

impl ComponentClassifier {
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    pub fn with_rules(rules: Vec<ComponentRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ComponentRule] {
        &self.rules
    }

    /// Name/type heuristic only; children are not inspected.
    pub fn classify(&self, node: &Node) -> ComponentType {
        let name = node.name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(node.node_type, &name))
            .map(|rule| rule.component_type)
            .unwrap_or(ComponentType::Unknown)
    }
}

impl Default for ComponentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Every visible node under `root` (root included) classified as
/// `component_type`, in depth-first order.
pub fn find_components_of_type<'a, D: DesignDocument + ?Sized>(
    doc: &'a D,
    root: &NodeId,
    component_type: ComponentType,
    classifier: &ComponentClassifier,
) -> Vec<&'a Node> {
    collect_visible_subtree(doc, root)
        .into_iter()
        .filter(|n| classifier.classify(n) == component_type)
        .collect()
}
