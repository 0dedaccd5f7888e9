//! Tests for the Harmony event hooks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use harmony_core::events::*;

#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    complete: AtomicUsize,
    failed: AtomicUsize,
    fonts_skipped: AtomicUsize,
}

impl HarmonyEventHandler for CountingHandler {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {
        self.complete.fetch_add(1, Ordering::Relaxed);
    }

    fn on_scan_failed(&self, _event: &ScanFailedEvent) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_font_skipped(&self, _event: &FontSkippedEvent) {
        self.fonts_skipped.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl HarmonyEventHandler for PanickingHandler {
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {
        panic!("handler failure");
    }
}

fn complete_event() -> ScanCompleteEvent {
    ScanCompleteEvent {
        component_type: "Button".into(),
        overall_score: 87,
        duration_ms: 3,
    }
}

#[test]
fn test_noop_defaults() {
    struct NoopHandler;
    impl HarmonyEventHandler for NoopHandler {}

    let handler = NoopHandler;
    handler.on_scan_started(&ScanStartedEvent {
        baseline_id: "1:1".into(),
        target_id: "2:2".into(),
        direction: "component-match".into(),
    });
    handler.on_scan_complete(&complete_event());
}

#[test]
fn test_dispatch_reaches_every_handler() {
    let first = Arc::new(CountingHandler::default());
    let second = Arc::new(CountingHandler::default());

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(first.clone());
    dispatcher.register(second.clone());
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_scan_complete(&complete_event());
    dispatcher.emit_scan_failed(&ScanFailedEvent {
        component_type: "Icon".into(),
        message: "No Icon components found in the design library".into(),
    });

    for handler in [&first, &second] {
        assert_eq!(handler.complete.load(Ordering::Relaxed), 1);
        assert_eq!(handler.failed.load(Ordering::Relaxed), 1);
        assert_eq!(handler.started.load(Ordering::Relaxed), 0);
    }
}

#[test]
fn test_panicking_handler_is_isolated() {
    let counter = Arc::new(CountingHandler::default());

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_scan_complete(&complete_event());
    assert_eq!(counter.complete.load(Ordering::Relaxed), 1);
}

#[test]
fn test_empty_dispatcher() {
    let dispatcher = EventDispatcher::default();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_font_skipped(&FontSkippedEvent {
        node_id: "3:3".into(),
        reason: "unavailable".into(),
    });
}
