//! Node and style attribute types.

use serde::{Deserialize, Serialize};

use harmony_core::types::collections::SmallVec2;
use harmony_core::types::NodeId;

/// Structural type tag assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Page,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Text,
    Vector,
    Rectangle,
    Ellipse,
    Line,
    Polygon,
    Star,
    BooleanOperation,
    Section,
    #[serde(other)]
    Other,
}

impl NodeType {
    /// Types that visually enclose other content.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Frame
                | Self::Group
                | Self::Component
                | Self::ComponentSet
                | Self::Instance
                | Self::Rectangle
                | Self::Section
        )
    }
}

/// Normalized RGB triple, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Kind of fill paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    Image,
    #[serde(other)]
    Other,
}

/// A fill paint. Only solid paints carry a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl Paint {
    pub fn solid(color: Rgb) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Some(color),
        }
    }

    /// The color of a solid paint, `None` for every other paint.
    pub fn solid_color(&self) -> Option<Rgb> {
        match self.kind {
            PaintKind::Solid => self.color,
            _ => None,
        }
    }
}

/// Padding of a node that supports it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }

    /// The four values in left, right, top, bottom order.
    pub fn values(&self) -> [f64; 4] {
        [self.left, self.right, self.top, self.bottom]
    }
}

/// Font metadata of a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub family: String,
    pub style: String,
    pub size: f64,
}

/// A node of the host document with the attributes the scorer reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub node_type: NodeType,
    /// The node's own visibility flag; ancestors are not considered.
    pub visible: bool,
    pub fills: SmallVec2<Paint>,
    /// Numeric corner radius; `None` when absent or mixed.
    pub corner_radius: Option<f64>,
    pub padding: Option<Padding>,
    pub width: f64,
    pub height: f64,
    /// Declared font of a text node, resolved through the document.
    pub text_style: Option<TextStyle>,
}

impl Node {
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
