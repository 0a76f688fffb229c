//! Command implementations
//!
//! Each command loads the plan, gates on validation and then does its one
//! thing. A cyclic plan is reported, not treated as an error.

pub mod common;
pub mod dot;
pub mod plot;
pub mod print;
pub mod validate;

pub use common::Outcome;
