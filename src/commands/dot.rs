//! Print the styled DOT description of a plan
//! Usage: brickflow dot <data>

use anyhow::Result;
use std::path::Path;

use crate::render::{dot::to_dot, RenderDefaults};

use super::common::{load_plan, report_invalid, Outcome};

/// Execute the dot command
pub fn execute(data: &Path) -> Result<Outcome> {
    let plan = load_plan(data)?;

    let graph = match plan.graph() {
        Some(graph) if plan.validate().is_valid() => graph,
        _ => {
            report_invalid(data, &plan);
            return Ok(Outcome::InvalidPlan);
        }
    };

    print!("{}", to_dot(plan.title(), graph, &RenderDefaults::default()));
    Ok(Outcome::Done)
}
