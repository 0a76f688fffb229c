//! Graphviz layout engine
//!
//! Runs `dot -K<layout> [-T<format>]` with the DOT description on stdin and
//! collects the image from stdout.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use super::{ImageFormat, Layout, LayoutEngine, RenderError};

/// Layout engine that shells out to Graphviz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizEngine {
    program: PathBuf,
}

impl GraphvizEngine {
    /// Executable looked up on `PATH`
    pub const PROGRAM: &'static str = "dot";

    /// Find the Graphviz executable on `PATH`
    pub fn locate() -> Result<Self, RenderError> {
        which::which(Self::PROGRAM)
            .map(Self::with_program)
            .map_err(|_| RenderError::EngineNotFound {
                program: Self::PROGRAM.to_string(),
            })
    }

    /// Use an explicit executable
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command-line arguments for a layout/format pair
    pub fn arguments(layout: Layout, format: Option<ImageFormat>) -> Vec<String> {
        let mut args = vec![format!("-K{layout}")];
        if let Some(format) = format {
            args.push(format!("-T{format}"));
        }
        args
    }
}

impl LayoutEngine for GraphvizEngine {
    fn layout(
        &self,
        dot: &str,
        layout: Layout,
        format: Option<ImageFormat>,
    ) -> Result<Vec<u8>, RenderError> {
        let args = Self::arguments(layout, format);
        debug!(program = %self.program.display(), ?args, "running graphviz");

        let spawn_error = |source| RenderError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // Feed stdin from a second thread so a large graph cannot deadlock
        // against a full stdout pipe.
        let stdin = child.stdin.take();
        let (output, written) = thread::scope(|scope| {
            let writer = stdin.map(|mut stdin| scope.spawn(move || stdin.write_all(dot.as_bytes())));
            let output = child.wait_with_output();
            let written = match writer {
                Some(handle) => handle
                    .join()
                    .unwrap_or_else(|_| Err(io::Error::other("graphviz stdin writer panicked"))),
                None => Ok(()),
            };
            (output, written)
        });

        let output = output.map_err(spawn_error)?;
        if !output.status.success() {
            return Err(RenderError::EngineFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        written.map_err(spawn_error)?;

        Ok(output.stdout)
    }
}
