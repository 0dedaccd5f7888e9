//! Scan configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which way a scan compares the baseline against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanDirection {
    /// Baseline components of the target's classified type form one
    /// aggregate pattern summary.
    #[default]
    ComponentMatch,
    /// Every direct child of the baseline frame is its own pattern source;
    /// the best-scoring one wins.
    Baseline,
}

impl ScanDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ComponentMatch => "component-match",
            Self::Baseline => "baseline",
        }
    }
}

impl fmt::Display for ScanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScanDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "component-match" => Ok(Self::ComponentMatch),
            "baseline" => Ok(Self::Baseline),
            other => Err(format!("unknown scan direction '{other}'")),
        }
    }
}

/// Configuration for scan orchestration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Scan direction. Default: component-match.
    pub direction: Option<ScanDirection>,
}

impl ScanConfig {
    pub fn effective_direction(&self) -> ScanDirection {
        self.direction.unwrap_or_default()
    }
}
