//! Presentation defaults applied to every plot
//!
//! Tuned for folder-shaped nodes carrying three-line labels. Per-node
//! attributes from the plan (label, bag color, style preset) override the
//! node defaults.

/// Global graph, node and edge attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDefaults {
    pub labelloc: String,
    pub overlap: String,
    pub sep: String,
    pub pad: String,
    pub node_shape: String,
    pub node_margin: String,
    pub node_penwidth: String,
    pub edge_penwidth: String,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            labelloc: "t".to_string(),
            overlap: "scale".to_string(),
            sep: "+20,20".to_string(),
            pad: "1.0".to_string(),
            node_shape: "folder".to_string(),
            node_margin: "0.3,0.3".to_string(),
            node_penwidth: "3".to_string(),
            edge_penwidth: "2".to_string(),
        }
    }
}

impl RenderDefaults {
    /// Graph attributes; the plan title becomes the graph label
    pub fn graph_attributes<'a>(&'a self, title: &'a str) -> Vec<(&'static str, &'a str)> {
        vec![
            ("label", title),
            ("labelloc", self.labelloc.as_str()),
            ("overlap", self.overlap.as_str()),
            ("sep", self.sep.as_str()),
            ("pad", self.pad.as_str()),
        ]
    }

    pub fn node_attributes(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("shape", self.node_shape.as_str()),
            ("margin", self.node_margin.as_str()),
            ("penwidth", self.node_penwidth.as_str()),
        ]
    }

    pub fn edge_attributes(&self) -> Vec<(&'static str, &str)> {
        vec![("penwidth", self.edge_penwidth.as_str())]
    }
}
