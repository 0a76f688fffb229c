//! Topological ordering of the plan graph

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::PlanGraph;

/// Kahn's algorithm with a min-heap on node ID
///
/// Among the nodes whose predecessors have all been emitted, the
/// lexicographically smallest ID always goes next, so the result does not
/// depend on declaration order. Returns `None` if the graph has a cycle.
pub fn lexicographic_topological_sort(graph: &PlanGraph) -> Option<Vec<String>> {
    let mut in_degree: HashMap<&str, usize> =
        graph.nodes().map(|node| (node.id.as_str(), 0)).collect();

    for (_, to) in graph.edges() {
        *in_degree.entry(to).or_insert(0) += 1;
    }

    let mut ready: BinaryHeap<Reverse<&str>> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(&id, _)| Reverse(id))
        .collect();

    let mut result = Vec::with_capacity(graph.len());

    while let Some(Reverse(node_id)) = ready.pop() {
        result.push(node_id.to_string());

        for next in graph.successors(node_id) {
            if let Some(degree) = in_degree.get_mut(next.as_str()) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(next.as_str()));
                }
            }
        }
    }

    if result.len() != graph.len() {
        return None;
    }

    Some(result)
}
