//! Plan document validation

use crate::plan::error::ValidationError;

use super::types::PlanDocument;

/// Validate every group of a plan document
///
/// Collects all problems instead of stopping at the first one. Group
/// numbers in the errors are 1-based, matching the order in the file.
pub fn validate(document: &PlanDocument) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (idx, step) in document.groups.iter().enumerate() {
        let index = idx + 1;

        if step.start.trim().is_empty() {
            errors.push(ValidationError::EmptyNodeId {
                index,
                field: "start",
            });
        }
        if step.next.trim().is_empty() {
            errors.push(ValidationError::EmptyNodeId {
                index,
                field: "next",
            });
        }

        if document.bag_color(step.bag).is_none() {
            errors.push(ValidationError::BagOutOfRange {
                index,
                start: step.start.clone(),
                bag: step.bag,
                available: document.bag_colors.len(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
