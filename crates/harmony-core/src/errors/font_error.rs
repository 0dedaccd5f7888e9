//! Font resolution errors.

use super::error_code::{self, HarmonyErrorCode};

/// Failure to resolve a text node's font metadata from the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontLoadError {
    #[error("Font unavailable: {family} {style}")]
    Unavailable { family: String, style: String },

    #[error("Node {id} is not a text node")]
    NotText { id: String },

    #[error("Node {id} has mixed fonts")]
    Mixed { id: String },
}

impl HarmonyErrorCode for FontLoadError {
    fn error_code(&self) -> &'static str {
        error_code::FONT_LOAD_ERROR
    }
}
