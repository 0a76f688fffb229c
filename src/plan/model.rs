//! The loaded plan and the operations on it

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use super::error::{PlanError, PlanResult};
use super::graph::{PlanGraph, PlanNode};
use super::schema::PlanDocument;
use crate::render::{self, LayoutEngine, RenderError, RenderOptions};

/// A plan document plus the graph derived from it
///
/// `Plan::default()` is an empty, not-loaded plan; every query on it
/// reports `NotLoaded` or produces nothing.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    title: String,
    bag_colors: Vec<String>,
    graph: Option<PlanGraph>,
}

/// Result of checking a plan before it is ordered or rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Cyclic,
    NotLoaded,
}

impl Validation {
    pub fn is_valid(self) -> bool {
        self == Validation::Valid
    }
}

/// One entry of the topological summary: a node and its next step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEntry {
    pub node: String,
    pub next: Option<String>,
}

/// Serializes as a single-entry map, `{node: next}`, with `null` for no next
impl Serialize for OrderEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.node, &self.next)?;
        map.end()
    }
}

impl Plan {
    /// Load and build a plan from a YAML file
    pub fn load(path: &Path) -> PlanResult<Self> {
        super::parser::parse_plan(path)
    }

    /// Load and build a plan from YAML content
    pub fn from_yaml(content: &str, source: &Path) -> PlanResult<Self> {
        super::parser::parse_plan_content(content, source)
    }

    /// Build a plan from an already parsed document
    pub fn from_document(document: PlanDocument, source: &Path) -> PlanResult<Self> {
        let graph = PlanGraph::build(&document).map_err(|e| PlanError::Invalid {
            path: source.to_path_buf(),
            errors: vec![e],
        })?;

        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "built plan graph"
        );

        Ok(Self {
            title: document.title,
            bag_colors: document.bag_colors,
            graph: Some(graph),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.graph.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bag_colors(&self) -> &[String] {
        &self.bag_colors
    }

    pub fn graph(&self) -> Option<&PlanGraph> {
        self.graph.as_ref()
    }

    /// Check whether the plan can be ordered and rendered
    pub fn validate(&self) -> Validation {
        match &self.graph {
            None => Validation::NotLoaded,
            Some(graph) if graph.is_acyclic() => Validation::Valid,
            Some(_) => Validation::Cyclic,
        }
    }

    /// One cycle of the plan, if it has any
    pub fn cycle(&self) -> Option<Vec<String>> {
        self.graph.as_ref().and_then(PlanGraph::find_cycle)
    }

    /// Nodes in topological order, each paired with its next step
    ///
    /// Empty unless the plan is valid. A node with several successors is
    /// paired with the first one declared.
    pub fn topological_order(&self) -> Vec<OrderEntry> {
        let Some(graph) = self.graph.as_ref() else {
            return Vec::new();
        };
        let Some(order) = graph.topological_order() else {
            return Vec::new();
        };

        order
            .into_iter()
            .map(|id| {
                let node = graph.node(&id);
                if let Some(node) = node.filter(|node| node.successors.len() > 1) {
                    warn!(
                        node = %id,
                        successors = ?node.successors,
                        "node has several next steps, summarising with the first"
                    );
                }
                OrderEntry {
                    next: node.and_then(PlanNode::first_successor).map(String::from),
                    node: id,
                }
            })
            .collect()
    }

    /// Render the plan to `output` through a layout engine
    ///
    /// Returns `Ok(false)` without touching `output` if the plan is not valid.
    pub fn render(
        &self,
        output: &Path,
        options: &RenderOptions,
        engine: &dyn LayoutEngine,
    ) -> Result<bool, RenderError> {
        render::render_plan(self, output, options, engine)
    }
}
