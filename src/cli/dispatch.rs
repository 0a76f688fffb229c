use anyhow::Result;
use brickflow::commands::{dot, plot, print, validate, Outcome};
use brickflow::completions::{generate_completions, Shell};
use brickflow::render::RenderOptions;
use clap::CommandFactory;
use std::str::FromStr;

use super::types::{Cli, Commands};

pub fn dispatch(command: Commands) -> Result<Outcome> {
    match command {
        Commands::Plot {
            layout,
            format,
            engine,
            data,
            output,
        } => plot::execute(
            &data,
            &output,
            RenderOptions::new(layout, format),
            engine,
        ),
        Commands::Validate { data } => validate::execute(&data),
        Commands::Print { json, data } => print::execute(&data, json),
        Commands::Dot { data } => dot::execute(&data),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut std::io::stdout());
            Ok(Outcome::Done)
        }
    }
}
