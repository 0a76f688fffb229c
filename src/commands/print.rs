//! Print a plan in topological order
//! Usage: brickflow print [--json] <data>

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::plan::OrderEntry;

use super::common::{load_plan, report_invalid, Outcome};

/// Nested summary printed by the command: `{groups: [{node: next}, ...]}`
#[derive(Debug, Serialize)]
pub struct OrderReport<'a> {
    pub groups: &'a [OrderEntry],
}

/// Execute the print command
pub fn execute(data: &Path, json: bool) -> Result<Outcome> {
    let plan = load_plan(data)?;

    if !plan.validate().is_valid() {
        report_invalid(data, &plan);
        return Ok(Outcome::InvalidPlan);
    }

    let order = plan.topological_order();
    print!("{}", format_order(&order, json)?);
    Ok(Outcome::Done)
}

/// Format the ordering as YAML, or as pretty JSON
pub fn format_order(order: &[OrderEntry], json: bool) -> Result<String> {
    let report = OrderReport { groups: order };
    if json {
        let mut out = serde_json::to_string_pretty(&report)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(serde_yaml::to_string(&report)?)
    }
}
