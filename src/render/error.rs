//! Error types for rendering

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors surfaced while laying out or writing a plot
#[derive(Debug, Error)]
pub enum RenderError {
    /// The layout engine executable could not be found
    #[error(
        "Graphviz `{program}` executable not found. Install Graphviz or pass --engine <path>.\n\
         On Ubuntu/Debian: sudo apt-get install graphviz\n\
         On macOS: brew install graphviz"
    )]
    EngineNotFound { program: String },

    /// The engine could not be started or talked to
    #[error("failed to run {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but reported failure
    #[error("{} exited with {status}: {}", .program.display(), .stderr.trim())]
    EngineFailed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    /// The rendered image could not be written
    #[error("failed to write plot to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
