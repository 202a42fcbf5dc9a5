//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Shell as Target, generate};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

const BIN_NAME: &str = "ciuchoteka";

/// Print a completion script for the chosen shell to stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let target = match args.shell {
        Shell::Bash => Target::Bash,
        Shell::Zsh => Target::Zsh,
        Shell::Fish => Target::Fish,
        Shell::PowerShell => Target::PowerShell,
        Shell::Elvish => Target::Elvish,
    };
    generate(target, &mut Cli::command(), BIN_NAME, &mut std::io::stdout());
    Ok(())
}
