//! Common utility functions shared across command implementations.
//!
//! This module provides utilities for:
//! - Loading a plan with user-facing error context
//! - Reporting plans that cannot be ordered or rendered
//! - Mapping command outcomes to process exit codes

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use crate::plan::{Plan, Validation};

/// Exit status used when a plan is well-formed but not a DAG
pub const INVALID_PLAN_EXIT: u8 = 2;

/// How a command finished, when it did not fail outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did its work
    Done,
    /// The plan is cyclic; nothing was produced
    InvalidPlan,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Done => 0,
            Outcome::InvalidPlan => INVALID_PLAN_EXIT,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Load a plan file, adding the path to any error
pub fn load_plan(path: &Path) -> Result<Plan> {
    Plan::load(path).with_context(|| format!("Failed to load plan: {}", path.display()))
}

/// Describe why a plan is not valid
pub fn invalid_reason(plan: &Plan) -> String {
    match plan.validate() {
        Validation::Valid => "plan is valid".to_string(),
        Validation::NotLoaded => "no plan loaded".to_string(),
        Validation::Cyclic => match plan.cycle() {
            Some(cycle) => format!("cycle detected: {}", cycle.join(" -> ")),
            None => "cycle detected".to_string(),
        },
    }
}

/// Print the not-valid notice for a plan file
pub fn report_invalid(path: &Path, plan: &Plan) {
    println!(
        "{} {} is not a valid plan ({})",
        "✗".red().bold(),
        path.display(),
        invalid_reason(plan)
    );
}
