//! Check a plan for cycles
//! Usage: brickflow validate <data>

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::common::{load_plan, report_invalid, Outcome};

/// Execute the validate command
pub fn execute(data: &Path) -> Result<Outcome> {
    let plan = load_plan(data)?;

    if !plan.validate().is_valid() {
        report_invalid(data, &plan);
        return Ok(Outcome::InvalidPlan);
    }

    let (nodes, edges) = plan
        .graph()
        .map(|graph| (graph.len(), graph.edge_count()))
        .unwrap_or_default();
    println!(
        "{} {} is a valid plan ({nodes} nodes, {edges} edges)",
        "✓".green().bold(),
        data.display()
    );
    Ok(Outcome::Done)
}
