//! Rendering plans through an external layout engine
//!
//! ## Module Organization
//!
//! - `defaults`: Fixed graph, node and edge presentation attributes
//! - `dot`: DOT description of a styled plan graph
//! - `graphviz`: `LayoutEngine` backed by the Graphviz `dot` executable
//! - `error`: Render error type

mod defaults;
pub mod dot;
mod error;
mod graphviz;

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::plan::Plan;

pub use defaults::RenderDefaults;
pub use error::RenderError;
pub use graphviz::GraphvizEngine;

/// Graphviz layout algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Layout {
    #[default]
    Neato,
    Dot,
    Twopi,
    Circo,
    Fdp,
    Nop,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Neato => "neato",
            Layout::Dot => "dot",
            Layout::Twopi => "twopi",
            Layout::Circo => "circo",
            Layout::Fdp => "fdp",
            Layout::Nop => "nop",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image format produced by the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Pdf,
    Png,
    Svg,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Gif => "gif",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }

    /// Guess the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "gif" => Some(ImageFormat::Gif),
            "jpeg" | "jpg" => Some(ImageFormat::Jpeg),
            "pdf" => Some(ImageFormat::Pdf),
            "png" => Some(ImageFormat::Png),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a plan should be laid out and in which format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub layout: Layout,
    /// Explicit format; `None` means infer from the output path
    pub format: Option<ImageFormat>,
}

impl RenderOptions {
    pub fn new(layout: Layout, format: Option<ImageFormat>) -> Self {
        Self { layout, format }
    }

    /// Format to request for `output`
    ///
    /// `None` leaves the choice to the engine.
    pub fn resolved_format(&self, output: &Path) -> Option<ImageFormat> {
        self.format.or_else(|| ImageFormat::from_path(output))
    }
}

/// An engine that lays out a DOT description and rasterizes it
pub trait LayoutEngine {
    /// Lay out `dot` and return the encoded image
    fn layout(
        &self,
        dot: &str,
        layout: Layout,
        format: Option<ImageFormat>,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Render a valid plan to `output`
///
/// Does nothing and returns `Ok(false)` when the plan is not valid.
pub fn render_plan(
    plan: &Plan,
    output: &Path,
    options: &RenderOptions,
    engine: &dyn LayoutEngine,
) -> Result<bool, RenderError> {
    let validation = plan.validate();
    let graph = match plan.graph() {
        Some(graph) if validation.is_valid() => graph,
        _ => {
            debug!(?validation, "skipping render of invalid plan");
            return Ok(false);
        }
    };

    let source = dot::to_dot(plan.title(), graph, &RenderDefaults::default());
    let format = options.resolved_format(output);
    debug!(layout = %options.layout, ?format, bytes = source.len(), "invoking layout engine");

    let image = engine.layout(&source, options.layout, format)?;
    std::fs::write(output, &image).map_err(|source| RenderError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(path = %output.display(), bytes = image.len(), "wrote plot");
    Ok(true)
}
