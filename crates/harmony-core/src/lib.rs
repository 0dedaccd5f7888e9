//! Harmony core: shared types, errors, configuration, event hooks, tracing
//! setup, and constants used by the analysis engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
