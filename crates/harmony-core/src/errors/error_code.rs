//! HarmonyErrorCode trait for host-boundary conversion.

/// Maps a Harmony error to a stable code string the host UI can switch on.
pub trait HarmonyErrorCode {
    /// Returns the error code string (e.g., "MISSING_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_INPUT: &str = "MISSING_INPUT";
pub const NODE_NOT_FOUND: &str = "NODE_NOT_FOUND";
pub const FONT_LOAD_ERROR: &str = "FONT_LOAD_ERROR";
pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
