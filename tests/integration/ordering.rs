//! Topological ordering and the print command

use super::helpers::{write_plan, CYCLIC_PLAN, LINEAR_PLAN};
use brickflow::commands::print::format_order;
use brickflow::commands::{print, Outcome};
use brickflow::plan::{OrderEntry, Plan, Validation};

fn entry(node: &str, next: Option<&str>) -> OrderEntry {
    OrderEntry {
        node: node.to_string(),
        next: next.map(String::from),
    }
}

#[test]
fn test_linear_plan_order() {
    let (_dir, path) = write_plan(LINEAR_PLAN);
    let plan = Plan::load(&path).unwrap();

    assert_eq!(
        plan.topological_order(),
        vec![
            entry("A", Some("B")),
            entry("B", Some("C")),
            entry("C", None),
        ]
    );
}

#[test]
fn test_cyclic_plan_has_no_order() {
    let (_dir, path) = write_plan(CYCLIC_PLAN);
    let plan = Plan::load(&path).unwrap();

    assert!(plan.topological_order().is_empty());
}

#[test]
fn test_order_is_reproducible() {
    let plan = r#"
title: Diamond
bagcolors: [red]
shapes: {independent: {}, integration: {}}
groups:
  - {start: top, end: t, bag: 1, next: right}
  - {start: top, end: t, bag: 1, next: left}
  - {start: right, end: r, bag: 1, next: bottom}
  - {start: left, end: l, bag: 1, next: bottom}
"#;
    let (_dir, path) = write_plan(plan);

    let first = format_order(&Plan::load(&path).unwrap().topological_order(), false).unwrap();
    let second = format_order(&Plan::load(&path).unwrap().topological_order(), false).unwrap();
    assert_eq!(first, second);

    let order = Plan::load(&path).unwrap().topological_order();
    let nodes: Vec<&str> = order.iter().map(|e| e.node.as_str()).collect();
    assert_eq!(nodes, vec!["top", "left", "right", "bottom"]);

    // `top` has two next steps; the first declared one is reported
    assert_eq!(order[0], entry("top", Some("right")));
}

#[test]
fn test_print_command_outcomes() {
    let (_dir, valid) = write_plan(LINEAR_PLAN);
    assert_eq!(print::execute(&valid, false).unwrap(), Outcome::Done);
    assert_eq!(print::execute(&valid, true).unwrap(), Outcome::Done);

    let (_dir, cyclic) = write_plan(CYCLIC_PLAN);
    assert_eq!(print::execute(&cyclic, false).unwrap(), Outcome::InvalidPlan);
}

#[test]
fn test_long_chain_plan_validates_and_orders() {
    let mut plan = String::from(
        "title: Long chain\nbagcolors: [red]\nshapes: {independent: {}, integration: {}}\ngroups:\n",
    );
    for i in 0..50_000 {
        plan.push_str(&format!(
            "  - {{start: s{i}, end: e, bag: 1, next: s{}}}\n",
            i + 1
        ));
    }
    let (_dir, path) = write_plan(&plan);

    let plan = Plan::load(&path).unwrap();
    assert_eq!(plan.validate(), Validation::Valid);
    assert_eq!(plan.cycle(), None);

    let order = plan.topological_order();
    assert_eq!(order.len(), 50_001);
    assert_eq!(order[0], entry("s0", Some("s1")));
    assert_eq!(order[50_000], entry("s50000", None));
}
