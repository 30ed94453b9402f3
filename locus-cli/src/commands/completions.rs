//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "locus";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// Installation hints go to stderr so stdout can be redirected straight
    /// into a completion file.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn print_instructions(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!("#   locus completions bash > ~/.local/share/bash-completion/completions/locus");
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(locus completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   locus completions zsh > ~/.zsh/completions/_locus");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   locus completions fish > ~/.config/fish/completions/locus.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   locus completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
