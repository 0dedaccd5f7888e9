//! Observability for Harmony.
//! `tracing` crate with `EnvFilter`, filter read from `HARMONY_LOG`.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
