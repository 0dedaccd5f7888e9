//! Configuration system for Harmony.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod harmony_config;
pub mod scan_config;
pub mod scoring_config;

pub use harmony_config::{CliOverrides, HarmonyConfig};
pub use scan_config::{ScanConfig, ScanDirection};
pub use scoring_config::{CategoryWeights, ScoringConfig, ShapePolicy};
