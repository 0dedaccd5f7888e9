//! Built-in classification rules, in priority order.

use crate::document::NodeType;

use super::types::ComponentType;

/// One category's matching rule: an accepted node type plus at least one
/// keyword found in the lowercased node name.
#[derive(Debug, Clone)]
pub struct ComponentRule {
    pub component_type: ComponentType,
    pub node_types: Vec<NodeType>,
    /// Lowercase substrings matched against the lowercased name.
    pub keywords: Vec<String>,
}

impl ComponentRule {
    pub fn new(component_type: ComponentType, node_types: &[NodeType], keywords: &[&str]) -> Self {
        Self {
            component_type,
            node_types: node_types.to_vec(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, node_type: NodeType, lowercase_name: &str) -> bool {
        self.node_types.contains(&node_type)
            && self.keywords.iter().any(|k| lowercase_name.contains(k.as_str()))
    }
}

const COMPONENT_LIKE: &[NodeType] = &[
    NodeType::Frame,
    NodeType::Group,
    NodeType::Component,
    NodeType::ComponentSet,
    NodeType::Instance,
];

/// The default rule list. Earlier rules win.
pub fn default_rules() -> Vec<ComponentRule> {
    let icon_types: Vec<NodeType> = COMPONENT_LIKE
        .iter()
        .copied()
        .chain([NodeType::Vector, NodeType::BooleanOperation])
        .collect();

    vec![
        ComponentRule::new(
            ComponentType::InputField,
            COMPONENT_LIKE,
            &["input", "field", "textbox", "text box", "search", "textarea"],
        ),
        ComponentRule::new(
            ComponentType::Button,
            COMPONENT_LIKE,
            &["button", "btn", "cta"],
        ),
        ComponentRule::new(
            ComponentType::Icon,
            &icon_types,
            &["icon", "glyph", "symbol"],
        ),
        ComponentRule::new(
            ComponentType::Card,
            COMPONENT_LIKE,
            &["card", "tile", "panel"],
        ),
        ComponentRule::new(
            ComponentType::Typography,
            &[NodeType::Text],
            &["heading", "title", "body", "label", "caption", "paragraph", "text"],
        ),
    ]
}
