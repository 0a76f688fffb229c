use anyhow::{anyhow, Result};
use clap::Command;
use clap_complete::{generate, shells};
use std::io::Write;
use std::str::FromStr;

/// Supported shell types for completion generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(anyhow!(
                "Unsupported shell: {s}. Supported shells: bash, zsh, fish"
            )),
        }
    }
}

/// Generate a shell completion script into `out`
///
/// # Example
///
/// ```no_run
/// use clap::Command;
/// use brickflow::completions::{generate_completions, Shell};
/// use std::str::FromStr;
///
/// let mut cmd = Command::new("brickflow");
/// let shell = Shell::from_str("bash").unwrap();
/// generate_completions(&mut cmd, shell, &mut std::io::stdout());
/// ```
pub fn generate_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name, out),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name, out),
        Shell::Fish => generate(shells::Fish, cmd, bin_name, out),
    }
}
