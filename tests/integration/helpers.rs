//! Shared test helpers for plan integration tests

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use brickflow::render::{ImageFormat, Layout, LayoutEngine, RenderError};

/// Two steps, `A -> B -> C`, three bag colors
pub const LINEAR_PLAN: &str = r##"
title: Linear build
bagcolors: [red, green, "#0000ff"]
shapes:
  independent:
    style: filled
    fillcolor: lightyellow
  integration:
    style: filled
    fillcolor: lightblue
    peripheries: 2
groups:
  - {start: A, end: foundation, bag: 1, next: B}
  - {start: B, end: walls, bag: 2, next: C}
"##;

/// `A -> B -> A`
pub const CYCLIC_PLAN: &str = r#"
title: Loop
bagcolors: [red, green]
shapes:
  independent: {}
  integration: {}
groups:
  - {start: A, end: x, bag: 1, next: B}
  - {start: B, end: y, bag: 2, next: A}
"#;

/// Write a plan file into a fresh temporary directory
pub fn write_plan(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("plan.yaml");
    fs::write(&path, content).expect("Failed to write plan file");
    (temp_dir, path)
}

/// One call made to a `RecordingEngine`
#[derive(Debug, Clone)]
pub struct LayoutCall {
    pub dot: String,
    pub layout: Layout,
    pub format: Option<ImageFormat>,
}

/// Layout engine that records its calls and returns fixed bytes
#[derive(Default)]
pub struct RecordingEngine {
    pub calls: RefCell<Vec<LayoutCall>>,
}

impl RecordingEngine {
    pub const IMAGE: &'static [u8] = b"fake-image-bytes";

    pub fn calls(&self) -> Vec<LayoutCall> {
        self.calls.borrow().clone()
    }
}

impl LayoutEngine for RecordingEngine {
    fn layout(
        &self,
        dot: &str,
        layout: Layout,
        format: Option<ImageFormat>,
    ) -> Result<Vec<u8>, RenderError> {
        self.calls.borrow_mut().push(LayoutCall {
            dot: dot.to_string(),
            layout,
            format,
        });
        Ok(Self::IMAGE.to_vec())
    }
}

/// Layout engine that always fails like a crashed Graphviz
pub struct FailingEngine;

impl LayoutEngine for FailingEngine {
    fn layout(
        &self,
        _dot: &str,
        _layout: Layout,
        _format: Option<ImageFormat>,
    ) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Spawn {
            program: PathBuf::from("dot"),
            source: std::io::Error::other("engine crashed"),
        })
    }
}
