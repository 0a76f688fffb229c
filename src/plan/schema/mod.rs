//! Plan YAML schema definitions and validation

mod scalar;
mod types;
mod validation;


pub use types::{NodeStyle, PlanDocument, Preset, ShapePresets, StepDefinition};
pub use validation::validate;
