//! Effective visibility through the ancestor chain.

use harmony_core::types::NodeId;

use crate::document::DesignDocument;

/// A node is visible when neither it nor any ancestor is marked invisible.
/// Unknown ids are treated as invisible.
pub fn is_visible<D: DesignDocument + ?Sized>(doc: &D, id: &NodeId) -> bool {
    let mut current = Some(id);
    while let Some(id) = current {
        match doc.node(id) {
            Some(node) if node.visible => current = doc.parent(id),
            _ => return false,
        }
    }
    true
}
