//! DOT description of a plan graph
//!
//! Every ID and attribute value is written as a quoted DOT string, so node
//! IDs may contain spaces or punctuation.

use std::fmt::Write;

use crate::plan::{PlanGraph, PlanNode};

use super::RenderDefaults;

/// Build the styled DOT description of a plan graph
pub fn to_dot(title: &str, graph: &PlanGraph, defaults: &RenderDefaults) -> String {
    let mut out = String::from("digraph {\n");

    write_statement(&mut out, "graph", &defaults.graph_attributes(title));
    write_statement(&mut out, "node", &defaults.node_attributes());
    write_statement(&mut out, "edge", &defaults.edge_attributes());

    for node in graph.nodes() {
        write_statement(&mut out, &quote(&node.id), &node_attributes(node));
    }

    for (from, to) in graph.edges() {
        let _ = writeln!(out, "  {} -> {};", quote(from), quote(to));
    }

    out.push_str("}\n");
    out
}

/// Per-node attributes: label and bag color first, then the style preset
fn node_attributes(node: &PlanNode) -> Vec<(&'static str, &str)> {
    let mut attributes = Vec::new();
    if let Some(label) = &node.label {
        attributes.push(("label", label.as_str()));
    }
    if let Some(color) = node.color.as_ref().filter(|_| node.style.color.is_none()) {
        attributes.push(("color", color.as_str()));
    }
    attributes.extend(node.style.attributes());
    attributes
}

fn write_statement(out: &mut String, target: &str, attributes: &[(&str, &str)]) {
    if attributes.is_empty() {
        let _ = writeln!(out, "  {target};");
        return;
    }

    let list = attributes
        .iter()
        .map(|(name, value)| format!("{name}={}", quote(value)))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "  {target} [{list}];");
}

/// Quote a string for DOT, escaping quotes, backslashes and newlines
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
