//! Scan errors.

use super::error_code::{self, HarmonyErrorCode};

/// Errors that prevent a scan from being attempted.
///
/// An empty pattern set is not an error: it is reported as a scan outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("Please select a design library frame first")]
    MissingBaseline,

    #[error("Please select a reference component first")]
    MissingTarget,

    #[error("Node not found in document: {id}")]
    NodeNotFound { id: String },
}

impl HarmonyErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingBaseline | Self::MissingTarget => error_code::MISSING_INPUT,
            Self::NodeNotFound { .. } => error_code::NODE_NOT_FOUND,
        }
    }
}
