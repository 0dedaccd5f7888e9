//! Event payload types.

/// Payload for `on_scan_started`.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub baseline_id: String,
    pub target_id: String,
    pub direction: String,
}

/// Payload for `on_patterns_extracted`.
#[derive(Debug, Clone)]
pub struct PatternsExtractedEvent {
    pub source_count: usize,
    pub colors: usize,
    pub radii: usize,
    pub typography_styles: usize,
    pub spacing_values: usize,
}

/// Payload for `on_font_skipped`.
#[derive(Debug, Clone)]
pub struct FontSkippedEvent {
    pub node_id: String,
    pub reason: String,
}

/// Payload for `on_scan_complete`.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub component_type: String,
    pub overall_score: u32,
    pub duration_ms: u64,
}

/// Payload for `on_scan_failed`.
#[derive(Debug, Clone)]
pub struct ScanFailedEvent {
    pub component_type: String,
    pub message: String,
}
