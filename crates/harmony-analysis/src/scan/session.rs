//! Explicit per-scan selection state.

use harmony_core::config::{ScanConfig, ScanDirection};
use harmony_core::errors::ScanError;
use harmony_core::types::NodeId;

/// The baseline and target a host UI has selected, plus the direction of
/// the next scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSession {
    baseline: Option<NodeId>,
    target: Option<NodeId>,
    direction: ScanDirection,
}

impl ScanSession {
    pub fn new(direction: ScanDirection) -> Self {
        Self {
            baseline: None,
            target: None,
            direction,
        }
    }

    /// An empty session using the configured scan direction.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.effective_direction())
    }

    pub fn select_baseline(&mut self, id: impl Into<NodeId>) {
        self.baseline = Some(id.into());
    }

    pub fn select_target(&mut self, id: impl Into<NodeId>) {
        self.target = Some(id.into());
    }

    pub fn set_direction(&mut self, direction: ScanDirection) {
        self.direction = direction;
    }

    pub fn clear(&mut self) {
        self.baseline = None;
        self.target = None;
    }

    pub fn baseline(&self) -> Option<&NodeId> {
        self.baseline.as_ref()
    }

    pub fn target(&self) -> Option<&NodeId> {
        self.target.as_ref()
    }

    pub fn direction(&self) -> ScanDirection {
        self.direction
    }

    /// Both selections, or the missing-input error for the first one absent.
    pub fn require_selection(&self) -> Result<(&NodeId, &NodeId), ScanError> {
        let baseline = self.baseline.as_ref().ok_or(ScanError::MissingBaseline)?;
        let target = self.target.as_ref().ok_or(ScanError::MissingTarget)?;
        Ok((baseline, target))
    }
}
