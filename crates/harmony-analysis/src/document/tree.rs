//! Arena-backed node tree built from the host's serialized document.

use serde::{Deserialize, Serialize};

use harmony_core::errors::{DocumentError, FontLoadError};
use harmony_core::types::collections::{FxHashMap, FxHashSet, SmallVec2};
use harmony_core::types::NodeId;

use super::types::*;
use super::DesignDocument;

/// A property the host reports as either a single value or `"mixed"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeMixed<T> {
    Value(T),
    Mixed(String),
}

impl<T> MaybeMixed<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Mixed(_) => None,
        }
    }
}

/// Font name as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

/// Serialized form of one node and its subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSpec {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<MaybeMixed<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<MaybeMixed<FontName>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<MaybeMixed<f64>>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

fn default_visible() -> bool {
    true
}

impl NodeSpec {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            visible: true,
            fills: Vec::new(),
            corner_radius: None,
            padding_left: None,
            padding_right: None,
            padding_top: None,
            padding_bottom: None,
            width: 0.0,
            height: 0.0,
            font_name: None,
            font_size: None,
            children: Vec::new(),
        }
    }

    pub fn frame(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeType::Frame)
    }

    pub fn text(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        family: &str,
        style: &str,
        size: f64,
    ) -> Self {
        let mut spec = Self::new(id, name, NodeType::Text);
        spec.font_name = Some(MaybeMixed::Value(FontName {
            family: family.to_string(),
            style: style.to_string(),
        }));
        spec.font_size = Some(MaybeMixed::Value(size));
        spec
    }

    pub fn with_fill(mut self, color: Rgb) -> Self {
        self.fills.push(Paint::solid(color));
        self
    }

    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(MaybeMixed::Value(radius));
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding_left = Some(padding.left);
        self.padding_right = Some(padding.right);
        self.padding_top = Some(padding.top);
        self.padding_bottom = Some(padding.bottom);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Padding is supported when the host reports any padding side;
    /// unreported sides read as zero.
    fn padding(&self) -> Option<Padding> {
        let sides = [
            self.padding_left,
            self.padding_right,
            self.padding_top,
            self.padding_bottom,
        ];
        if sides.iter().all(Option::is_none) {
            return None;
        }
        Some(Padding {
            left: self.padding_left.unwrap_or(0.0),
            right: self.padding_right.unwrap_or(0.0),
            top: self.padding_top.unwrap_or(0.0),
            bottom: self.padding_bottom.unwrap_or(0.0),
        })
    }

    fn into_node(self) -> Node {
        let padding = self.padding();
        let text_style = match (self.font_name, self.font_size) {
            (Some(MaybeMixed::Value(font)), Some(MaybeMixed::Value(size))) => Some(TextStyle {
                family: font.family,
                style: font.style,
                size,
            }),
            _ => None,
        };
        Node {
            id: self.id,
            name: self.name,
            node_type: self.node_type,
            visible: self.visible,
            fills: SmallVec2::from_vec(self.fills),
            corner_radius: self.corner_radius.and_then(MaybeMixed::value),
            padding,
            width: self.width,
            height: self.height,
            text_style,
        }
    }
}

/// Serialized document: the root node plus the fonts the host cannot load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSpec {
    pub root: NodeSpec,
    /// Entries are either a family (`"Inter"`) or a family and style
    /// (`"Inter Bold"`).
    #[serde(default)]
    pub unavailable_fonts: Vec<String>,
}

#[derive(Debug)]
struct NodeEntry {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory node tree with parent back-references.
#[derive(Debug)]
pub struct NodeTree {
    root: NodeId,
    entries: FxHashMap<NodeId, NodeEntry>,
    unavailable_fonts: FxHashSet<String>,
}

impl NodeTree {
    /// Parse a serialized [`DocumentSpec`].
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let spec: DocumentSpec = serde_json::from_str(json)?;
        Self::from_spec(spec)
    }

    /// Build a tree rooted at `root` where every font resolves.
    pub fn from_root(root: NodeSpec) -> Result<Self, DocumentError> {
        Self::from_spec(DocumentSpec {
            root,
            unavailable_fonts: Vec::new(),
        })
    }

    pub fn from_spec(spec: DocumentSpec) -> Result<Self, DocumentError> {
        let root = spec.root.id.clone();
        let mut entries = FxHashMap::default();
        let mut stack: Vec<(NodeSpec, Option<NodeId>)> = vec![(spec.root, None)];

        while let Some((mut node_spec, parent)) = stack.pop() {
            if entries.contains_key(&node_spec.id) {
                return Err(DocumentError::DuplicateId {
                    id: node_spec.id.to_string(),
                });
            }
            let children = std::mem::take(&mut node_spec.children);
            let child_ids: Vec<NodeId> = children.iter().map(|c| c.id.clone()).collect();
            let node = node_spec.into_node();
            let id = node.id.clone();
            for child in children {
                stack.push((child, Some(id.clone())));
            }
            entries.insert(
                id,
                NodeEntry {
                    node,
                    parent,
                    children: child_ids,
                },
            );
        }

        Ok(Self {
            root,
            entries,
            unavailable_fonts: spec.unavailable_fonts.into_iter().collect(),
        })
    }

    /// Mark a font family, or a `"family style"` pair, as failing to load.
    pub fn with_unavailable_font(mut self, font: impl Into<String>) -> Self {
        self.unavailable_fonts.insert(font.into());
        self
    }

    pub fn root(&self) -> &NodeId {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn font_available(&self, style: &TextStyle) -> bool {
        !self.unavailable_fonts.contains(&style.family)
            && !self
                .unavailable_fonts
                .contains(&format!("{} {}", style.family, style.style))
    }
}

impl DesignDocument for NodeTree {
    fn node(&self, id: &NodeId) -> Option<&Node> {
        self.entries.get(id).map(|e| &e.node)
    }

    fn parent(&self, id: &NodeId) -> Option<&NodeId> {
        self.entries.get(id).and_then(|e| e.parent.as_ref())
    }

    fn children(&self, id: &NodeId) -> &[NodeId] {
        self.entries
            .get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    fn resolve_text_style(&self, id: &NodeId) -> Result<TextStyle, FontLoadError> {
        let node = self
            .node(id)
            .filter(|n| n.is_text())
            .ok_or_else(|| FontLoadError::NotText { id: id.to_string() })?;
        let style = node
            .text_style
            .as_ref()
            .ok_or_else(|| FontLoadError::Mixed { id: id.to_string() })?;
        if !self.font_available(style) {
            return Err(FontLoadError::Unavailable {
                family: style.family.clone(),
                style: style.style.clone(),
            });
        }
        Ok(style.clone())
    }
}
