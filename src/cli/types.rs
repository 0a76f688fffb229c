use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use brickflow::render::{ImageFormat, Layout};

#[derive(Parser)]
#[command(name = "brickflow")]
#[command(about = "Plot and order bag-and-step workflow plans", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a plan and render it to an image
    Plot {
        /// Graphviz layout algorithm
        #[arg(long, value_enum, default_value_t = Layout::Neato)]
        layout: Layout,

        /// Output format (inferred from the output extension when omitted)
        #[arg(long, value_enum)]
        format: Option<ImageFormat>,

        /// Path to the Graphviz `dot` executable (searched on PATH by default)
        #[arg(long)]
        engine: Option<PathBuf>,

        /// Path to the plan file
        data: PathBuf,

        /// Path of the image to write
        output: PathBuf,
    },

    /// Check that a plan has no cycles
    Validate {
        /// Path to the plan file
        data: PathBuf,
    },

    /// Print the plan's steps in topological order
    Print {
        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,

        /// Path to the plan file
        data: PathBuf,
    },

    /// Print the styled Graphviz DOT description of a plan
    Dot {
        /// Path to the plan file
        data: PathBuf,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}
