//! Document loading errors.

use super::error_code::{self, HarmonyErrorCode};

/// Errors that can occur while building a node tree from serialized input.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Malformed document: {message}")]
    Malformed { message: String },

    #[error("Duplicate node id: {id}")]
    DuplicateId { id: String },
}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed {
            message: e.to_string(),
        }
    }
}

impl HarmonyErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        error_code::DOCUMENT_ERROR
    }
}
