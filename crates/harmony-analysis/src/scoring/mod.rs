//! Harmony scoring: compares a target component against a pattern summary.

pub mod scorer;
pub mod types;

pub use scorer::HarmonyScorer;
pub use types::HarmonyScore;
