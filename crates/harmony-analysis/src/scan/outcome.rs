//! Scan result payloads returned to the host UI.

use serde::{Deserialize, Serialize};

use harmony_core::types::NodeId;

use crate::classify::ComponentType;
use crate::patterns::PatternSummary;
use crate::scoring::HarmonyScore;

/// The baseline child whose patterns produced the winning score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSource {
    pub id: NodeId,
    pub name: String,
}

/// Result of one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ScanOutcome {
    /// The target was scored.
    Complete {
        component_type: ComponentType,
        patterns: PatternSummary,
        score: HarmonyScore,
        /// Set in baseline mode only.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<PatternSource>,
    },
    /// No pattern source matched; nothing was scored.
    NoMatches {
        component_type: ComponentType,
        message: String,
    },
}

impl ScanOutcome {
    pub fn no_matches(component_type: ComponentType) -> Self {
        Self::NoMatches {
            component_type,
            message: format!("No {component_type} components found in the design library"),
        }
    }

    pub fn component_type(&self) -> ComponentType {
        match self {
            Self::Complete { component_type, .. } | Self::NoMatches { component_type, .. } => {
                *component_type
            }
        }
    }

    pub fn score(&self) -> Option<&HarmonyScore> {
        match self {
            Self::Complete { score, .. } => Some(score),
            Self::NoMatches { .. } => None,
        }
    }
}
