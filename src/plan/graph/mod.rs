//! Plan graph: steps as nodes, "next step" relationships as edges

mod cycle;
mod nodes;
mod scheduling;


use std::collections::HashMap;

use tracing::trace;

use crate::plan::error::ValidationError;
use crate::plan::schema::{PlanDocument, Preset, ShapePresets, StepDefinition};

pub use nodes::PlanNode;

/// Directed graph of plan steps
///
/// Nodes keep the order in which they were first declared so that any
/// output derived from them is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanGraph {
    nodes: Vec<PlanNode>,
    /// Map from node ID to position in `nodes`
    index: HashMap<String, usize>,
}

impl PlanGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a plan document, applying groups in file order
    pub fn build(document: &PlanDocument) -> Result<Self, ValidationError> {
        let mut graph = Self::new();

        for (idx, step) in document.groups.iter().enumerate() {
            let color = document
                .bag_color(step.bag)
                .ok_or_else(|| ValidationError::BagOutOfRange {
                    index: idx + 1,
                    start: step.start.clone(),
                    bag: step.bag,
                    available: document.bag_colors.len(),
                })?;
            graph.apply_step(step, color, &document.shapes);
        }

        Ok(graph)
    }

    /// Apply one step declaration
    ///
    /// - An existing `start` gets the step's label and color and the
    ///   integration preset, replacing whatever it had before.
    /// - A new `start` gets label, color and the independent preset.
    /// - A missing `next` is created bare. An existing, styled `next` is
    ///   restyled with the integration preset, unless it is the step's own
    ///   `start`.
    /// - The edge `start -> next` is added once.
    pub fn apply_step(&mut self, step: &StepDefinition, color: &str, shapes: &ShapePresets) {
        let preset = if self.contains(&step.start) {
            Preset::Integration
        } else {
            Preset::Independent
        };
        trace!(start = %step.start, next = %step.next, ?preset, "applying step");

        let start = self.ensure_node(&step.start);
        let node = &mut self.nodes[start];
        node.label = Some(step.label());
        node.color = Some(color.to_string());
        node.apply_preset(preset, shapes.get(preset));

        let next = self.ensure_node(&step.next);
        let node = &mut self.nodes[next];
        if next != start && !node.is_bare() {
            node.apply_preset(Preset::Integration, &shapes.integration);
        }

        self.add_edge(start, &step.next);
    }

    fn ensure_node(&mut self, id: &str) -> usize {
        if let Some(&position) = self.index.get(id) {
            return position;
        }
        let position = self.nodes.len();
        self.nodes.push(PlanNode::bare(id));
        self.index.insert(id.to_string(), position);
        position
    }

    fn add_edge(&mut self, from: usize, to: &str) {
        let successors = &mut self.nodes[from].successors;
        if !successors.iter().any(|s| s == to) {
            successors.push(to.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get a specific node by ID
    pub fn node(&self, id: &str) -> Option<&PlanNode> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    /// All nodes in first-declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &PlanNode> {
        self.nodes.iter()
    }

    /// All edges as `(from, to)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.iter().flat_map(|node| {
            node.successors
                .iter()
                .map(move |next| (node.id.as_str(), next.as_str()))
        })
    }

    pub fn successors(&self, id: &str) -> &[String] {
        self.node(id)
            .map(|node| node.successors.as_slice())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.successors.len()).sum()
    }

    /// Whether the graph is a DAG
    pub fn is_acyclic(&self) -> bool {
        scheduling::lexicographic_topological_sort(self).is_some()
    }

    /// One cycle in the graph, as a closed path (`a -> b -> a`)
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        cycle::find_cycle(self)
    }

    /// Topological order with ties broken by node ID, `None` if cyclic
    pub fn topological_order(&self) -> Option<Vec<String>> {
        scheduling::lexicographic_topological_sort(self)
    }
}
