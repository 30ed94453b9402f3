//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, CopyCommand, EmptyCommand, InfoCommand, IsEmptyCommand, LsCommand,
    MkdirCommand, MoveCommand, RemoveCommand, RenameCommand, ResolveCommand, TouchCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for working with files and folders through typed handles.
#[derive(Parser)]
#[command(name = "locus")]
#[command(version, about = "Resolve, list and manipulate files and folders", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical path of a file or folder
    Resolve(ResolveCommand),

    /// List the files and subfolders of a folder
    Ls(LsCommand),

    /// Show information about a file or folder
    Info(InfoCommand),

    /// Create a folder
    Mkdir(MkdirCommand),

    /// Create a file if it does not exist
    Touch(TouchCommand),

    /// Rename a file or folder in place
    Rename(RenameCommand),

    /// Move a file or folder into another folder
    Mv(MoveCommand),

    /// Copy a file or folder into another folder
    Cp(CopyCommand),

    /// Delete a file or folder
    Rm(RemoveCommand),

    /// Delete everything inside a folder
    Empty(EmptyCommand),

    /// Exit successfully if a folder is empty
    IsEmpty(IsEmptyCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ls_flags() {
        let cli = Cli::try_parse_from(["locus", "ls", "/tmp", "-r", "--all", "--format", "json"])
            .unwrap();
        match cli.command {
            Command::Ls(ls) => {
                assert_eq!(ls.path.as_deref(), Some("/tmp"));
                assert!(ls.recursive);
                assert!(ls.all);
                assert_eq!(ls.format, Some(locus::OutputFormat::Json));
            }
            _ => panic!("expected ls"),
        }
    }

    #[test]
    fn test_ls_files_conflicts_with_folders() {
        assert!(Cli::try_parse_from(["locus", "ls", "--files", "--folders"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["locus", "--verbose", "--quiet", "ls"]).is_err());
    }

    #[test]
    fn test_is_empty_subcommand_name() {
        let cli = Cli::try_parse_from(["locus", "is-empty", "."]).unwrap();
        assert!(matches!(cli.command, Command::IsEmpty(_)));
    }
}
