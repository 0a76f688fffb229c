//! Plan document parser - reads a YAML plan and builds its graph

use std::path::Path;

use tracing::debug;

use super::error::{PlanError, PlanResult};
use super::model::Plan;
use super::schema::{self, PlanDocument};

/// Parse a plan file
pub fn parse_plan(path: &Path) -> PlanResult<Plan> {
    let content = std::fs::read_to_string(path).map_err(|source| PlanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_plan_content(&content, path)
}

/// Parse plan content (for testing without file system)
pub fn parse_plan_content(content: &str, source_path: &Path) -> PlanResult<Plan> {
    let document: PlanDocument =
        serde_yaml::from_str(content).map_err(|source| PlanError::Parse {
            path: source_path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %source_path.display(),
        groups = document.groups.len(),
        bags = document.bag_colors.len(),
        "parsed plan document"
    );

    schema::validate(&document).map_err(|errors| PlanError::Invalid {
        path: source_path.to_path_buf(),
        errors,
    })?;

    Plan::from_document(document, source_path)
}
