//! Depth-first collection of visible nodes.

use harmony_core::types::NodeId;

use super::visibility::is_visible;
use crate::document::{DesignDocument, Node};

/// The root followed by its visible descendants in depth-first pre-order.
///
/// An invisible node contributes neither itself nor its subtree. The root
/// is checked through its full ancestor chain, so a root inside a hidden
/// frame yields nothing.
pub fn collect_visible_subtree<'a, D: DesignDocument + ?Sized>(
    doc: &'a D,
    root: &NodeId,
) -> Vec<&'a Node> {
    let mut out = Vec::new();
    if !is_visible(doc, root) {
        return out;
    }
    let Some(root_node) = doc.node(root) else {
        return out;
    };

    let mut stack = vec![root_node];
    while let Some(node) = stack.pop() {
        out.push(node);
        for child_id in doc.children(&node.id).iter().rev() {
            if let Some(child) = doc.node(child_id).filter(|c| c.visible) {
                stack.push(child);
            }
        }
    }
    out
}

/// The first text node in depth-first order under `root`, root included.
pub fn first_text_node<'a, D: DesignDocument + ?Sized>(
    doc: &'a D,
    root: &NodeId,
) -> Option<&'a Node> {
    collect_visible_subtree(doc, root)
        .into_iter()
        .find(|n| n.is_text())
}

/// The visible container with the largest area under `root`, root included.
/// Ties keep the node seen first.
pub fn largest_container<'a, D: DesignDocument + ?Sized>(
    doc: &'a D,
    root: &NodeId,
) -> Option<&'a Node> {
    collect_visible_subtree(doc, root)
        .into_iter()
        .filter(|n| n.node_type.is_container())
        .fold(None, |best: Option<&Node>, n| match best {
            Some(b) if b.area() >= n.area() => Some(b),
            _ => Some(n),
        })
}
