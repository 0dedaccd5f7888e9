//! Semantic component categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of component categories a node can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    #[serde(rename = "Input Field")]
    InputField,
    Button,
    Icon,
    Card,
    Typography,
    Unknown,
}

impl ComponentType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InputField => "Input Field",
            Self::Button => "Button",
            Self::Icon => "Icon",
            Self::Card => "Card",
            Self::Typography => "Typography",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
