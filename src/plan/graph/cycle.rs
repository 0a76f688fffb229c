//! Cycle detection for the plan graph

use std::collections::HashSet;

use super::PlanGraph;

/// Find one cycle using DFS, visiting nodes in declaration order
///
/// The walk keeps its own stack of `(node, next successor index)` frames,
/// so plans with very long chains do not exhaust the thread stack.
pub fn find_cycle(graph: &PlanGraph) -> Option<Vec<String>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut on_path: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&str, usize)> = Vec::new();

    for root in graph.nodes() {
        let root = root.id.as_str();
        if !visited.insert(root) {
            continue;
        }
        on_path.insert(root);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node_id, cursor) = *frame;
            frame.1 += 1;

            let Some(next) = graph.successors(node_id).get(cursor) else {
                stack.pop();
                on_path.remove(node_id);
                continue;
            };
            let next = next.as_str();

            if on_path.contains(next) {
                // Close the loop: path from `next` back around to `next`
                let start = stack.iter().position(|&(id, _)| id == next).unwrap_or(0);
                let mut cycle: Vec<String> =
                    stack[start..].iter().map(|(id, _)| id.to_string()).collect();
                cycle.push(next.to_string());
                return Some(cycle);
            }

            if visited.insert(next) {
                on_path.insert(next);
                stack.push((next, 0));
            }
        }
    }

    None
}
