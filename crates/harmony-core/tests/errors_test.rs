//! Tests for Harmony error types and error codes.

use harmony_core::errors::*;

#[test]
fn test_missing_input_codes() {
    assert_eq!(ScanError::MissingBaseline.error_code(), "MISSING_INPUT");
    assert_eq!(ScanError::MissingTarget.error_code(), "MISSING_INPUT");
    assert_eq!(
        ScanError::NodeNotFound { id: "1:2".into() }.error_code(),
        "NODE_NOT_FOUND"
    );
}

#[test]
fn test_display_string_format() {
    let err = ScanError::NodeNotFound { id: "4:7".into() };
    assert_eq!(
        err.display_string(),
        "[NODE_NOT_FOUND] Node not found in document: 4:7"
    );

    let err = FontLoadError::Unavailable {
        family: "Inter".into(),
        style: "Bold".into(),
    };
    assert_eq!(err.display_string(), "[FONT_LOAD_ERROR] Font unavailable: Inter Bold");
}

#[test]
fn test_document_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
    let err: DocumentError = json_err.into();
    assert!(matches!(err, DocumentError::Malformed { .. }));
    assert_eq!(err.error_code(), "DOCUMENT_ERROR");
}

#[test]
fn test_config_error_code() {
    let err = ConfigError::ValidationFailed {
        field: "scoring".into(),
        message: "bad".into(),
    };
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("scoring"));
}
