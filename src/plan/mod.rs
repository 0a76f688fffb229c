//! Plan loading and analysis
//!
//! This module handles:
//! - Parsing plan documents (YAML)
//! - Validating step declarations
//! - Building the step graph, checking it for cycles and ordering it

pub mod error;
pub mod graph;
mod model;
pub mod parser;
pub mod schema;

// Re-export commonly used types
pub use error::{PlanError, PlanResult, ValidationError};
pub use graph::{PlanGraph, PlanNode};
pub use model::{OrderEntry, Plan, Validation};
pub use parser::{parse_plan, parse_plan_content};
pub use schema::{NodeStyle, PlanDocument, Preset, ShapePresets, StepDefinition};
