//! Visibility checks and depth-first subtree collection.

pub mod collector;
pub mod visibility;

pub use collector::{collect_visible_subtree, first_text_node, largest_container};
pub use visibility::is_visible;
