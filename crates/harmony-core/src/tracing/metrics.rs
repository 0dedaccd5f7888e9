//! Structured span field names shared across Harmony subsystems.

/// Extractor: number of visible nodes visited.
pub const NODES_VISITED: &str = "nodes_visited";

/// Extractor: number of baseline roots contributing patterns.
pub const PATTERN_SOURCES: &str = "pattern_sources";

/// Extractor: number of text nodes whose font failed to resolve.
pub const FONTS_SKIPPED: &str = "fonts_skipped";

/// Scorer: overall harmony score (0-100).
pub const OVERALL_SCORE: &str = "overall_score";

/// Orchestrator: classified component type name.
pub const COMPONENT_TYPE: &str = "component_type";

/// Orchestrator: scan duration in milliseconds.
pub const SCAN_DURATION_MS: &str = "scan_duration_ms";
