//! Read-only view of the host design document.
//!
//! The host owns the nodes; this crate only reads them through
//! [`DesignDocument`]. [`NodeTree`] is an arena implementation loaded from
//! the host's serialized node tree.

pub mod tree;
pub mod types;

pub use tree::{DocumentSpec, NodeSpec, NodeTree};
pub use types::*;

use harmony_core::errors::FontLoadError;
use harmony_core::types::NodeId;

/// Access to a host document's node tree.
pub trait DesignDocument {
    /// Look up a node by id.
    fn node(&self, id: &NodeId) -> Option<&Node>;

    /// Parent of a node, `None` for the root or an unknown id.
    fn parent(&self, id: &NodeId) -> Option<&NodeId>;

    /// Children of a node in document order; empty for leaves and unknown ids.
    fn children(&self, id: &NodeId) -> &[NodeId];

    /// Resolve the font metadata of a text node. The host may need to fetch
    /// font data to answer, and the fetch can fail.
    fn resolve_text_style(&self, id: &NodeId) -> Result<TextStyle, FontLoadError>;
}
