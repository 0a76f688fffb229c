//! Graph node types for the plan graph

use crate::plan::schema::{NodeStyle, Preset};

/// A node in the plan graph
///
/// Nodes that only ever appear as a `next` target carry no label, color or
/// style; Graphviz draws them with the global defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanNode {
    pub id: String,
    pub label: Option<String>,
    /// Border color taken from the bag palette
    pub color: Option<String>,
    /// Preset currently applied, `None` for bare nodes
    pub preset: Option<Preset>,
    pub style: NodeStyle,
    /// Outgoing edges in insertion order, without duplicates
    pub successors: Vec<String>,
}

impl PlanNode {
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            color: None,
            preset: None,
            style: NodeStyle::default(),
            successors: Vec::new(),
        }
    }

    pub fn is_bare(&self) -> bool {
        self.preset.is_none()
    }

    /// Replace the node's style wholesale with a preset
    pub fn apply_preset(&mut self, preset: Preset, style: &NodeStyle) {
        self.preset = Some(preset);
        self.style = style.clone();
    }

    /// First successor in declaration order
    pub fn first_successor(&self) -> Option<&str> {
        self.successors.first().map(String::as_str)
    }
}
