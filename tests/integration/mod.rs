//! Integration tests for brickflow
//!
//! These tests load plan files from disk and drive the loader, the
//! analyzer and the renderer together, with a fake layout engine standing
//! in for Graphviz.

pub mod helpers;
pub mod ordering;
pub mod rendering;
