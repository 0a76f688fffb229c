//! Error types for plan loading
//!
//! Structural problems (unreadable file, malformed YAML, missing keys) and
//! semantic problems (bad bag index, empty node IDs) both fail the load
//! entirely; no partially built graph is ever handed out.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for plan loading
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors that can occur while loading a plan document
#[derive(Debug, Error)]
pub enum PlanError {
    /// The plan file could not be read
    #[error("failed to read plan file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The plan file is not a well-formed plan document
    #[error("failed to parse plan file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but one or more groups are unusable
    #[error("invalid plan {}: {}", .path.display(), join_errors(.errors))]
    Invalid {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },
}

impl PlanError {
    /// Validation errors carried by this error, if any
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// A problem with a single group (step declaration) of a plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `bag` does not index into `bagcolors` (bags are 1-based)
    #[error("group #{index} ({start}): bag {bag} is out of range, bagcolors has {available} entries")]
    BagOutOfRange {
        index: usize,
        start: String,
        bag: i64,
        available: usize,
    },

    /// `start` or `next` is empty
    #[error("group #{index}: `{field}` cannot be empty")]
    EmptyNodeId { index: usize, field: &'static str },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
