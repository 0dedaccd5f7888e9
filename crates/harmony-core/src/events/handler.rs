//! HarmonyEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Receives scan lifecycle events. This is the output sink a host UI
/// implements to render progress and results.
pub trait HarmonyEventHandler: Send + Sync {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_patterns_extracted(&self, _event: &PatternsExtractedEvent) {}
    fn on_font_skipped(&self, _event: &FontSkippedEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
    fn on_scan_failed(&self, _event: &ScanFailedEvent) {}
}
