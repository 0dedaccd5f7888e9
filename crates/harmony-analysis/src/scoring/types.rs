//! Harmony score types.

use serde::{Deserialize, Serialize};

/// Four category scores and their weighted overall score, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonyScore {
    pub color_score: u32,
    pub shape_score: u32,
    pub typography_score: u32,
    pub spacing_score: u32,
    pub overall_score: u32,
}
