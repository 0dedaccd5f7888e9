//! Scan sessions and orchestration: selects pattern sources, extracts,
//! scores, and reports the outcome.

pub mod orchestrator;
pub mod outcome;
pub mod session;

pub use orchestrator::ScanOrchestrator;
pub use outcome::{PatternSource, ScanOutcome};
pub use session::ScanSession;
