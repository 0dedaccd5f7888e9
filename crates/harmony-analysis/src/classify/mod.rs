//! Component-type classification by node type and name keywords.

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{find_components_of_type, ComponentClassifier};
pub use rules::{default_rules, ComponentRule};
pub use types::ComponentType;
