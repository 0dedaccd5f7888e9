//! Error handling for Harmony.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod document_error;
pub mod error_code;
pub mod font_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use document_error::DocumentError;
pub use error_code::HarmonyErrorCode;
pub use font_error::FontLoadError;
pub use scan_error::ScanError;
