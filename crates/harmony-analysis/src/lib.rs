//! Harmony analysis engine: walks a host design document, extracts style
//! patterns from a baseline and scores a target component against them.

pub mod classify;
pub mod document;
pub mod patterns;
pub mod scan;
pub mod scoring;
pub mod traversal;

pub use classify::{ComponentClassifier, ComponentType};
pub use document::{DesignDocument, Node, NodeSpec, NodeTree, NodeType};
pub use patterns::{PatternExtractor, PatternSummary};
pub use scan::{ScanOrchestrator, ScanOutcome, ScanSession};
pub use scoring::{HarmonyScore, HarmonyScorer};
