//! Plot a plan to an image file
//! Usage: brickflow plot [--layout L] [--format F] <data> <output>

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::plan::Plan;
use crate::render::{GraphvizEngine, LayoutEngine, RenderOptions};

use super::common::{load_plan, report_invalid, Outcome};

/// Execute the plot command with Graphviz
///
/// The plan is loaded and checked before Graphviz is looked up.
pub fn execute(
    data: &Path,
    output: &Path,
    options: RenderOptions,
    engine: Option<PathBuf>,
) -> Result<Outcome> {
    let Some(plan) = load_valid_plan(data)? else {
        return Ok(Outcome::InvalidPlan);
    };

    let engine = match engine {
        Some(program) => GraphvizEngine::with_program(program),
        None => GraphvizEngine::locate()?,
    };
    plot(data, &plan, output, &options, &engine)
}

/// Execute the plot command with any layout engine
pub fn execute_with_engine(
    data: &Path,
    output: &Path,
    options: RenderOptions,
    engine: &dyn LayoutEngine,
) -> Result<Outcome> {
    match load_valid_plan(data)? {
        Some(plan) => plot(data, &plan, output, &options, engine),
        None => Ok(Outcome::InvalidPlan),
    }
}

/// Load a plan, reporting it and returning `None` if it cannot be rendered
fn load_valid_plan(data: &Path) -> Result<Option<Plan>> {
    let plan = load_plan(data)?;

    if !plan.validate().is_valid() {
        report_invalid(data, &plan);
        return Ok(None);
    }
    Ok(Some(plan))
}

fn plot(
    data: &Path,
    plan: &Plan,
    output: &Path,
    options: &RenderOptions,
    engine: &dyn LayoutEngine,
) -> Result<Outcome> {
    let written = plan
        .render(output, options, engine)
        .with_context(|| format!("Failed to plot {}", data.display()))?;
    if !written {
        report_invalid(data, plan);
        return Ok(Outcome::InvalidPlan);
    }

    println!(
        "{} Plot written to {}",
        "✓".green().bold(),
        output.display()
    );
    Ok(Outcome::Done)
}
