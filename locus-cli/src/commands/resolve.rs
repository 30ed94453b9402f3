//! Resolve command implementation.
//!
//! Prints the canonical form of a path after `~` expansion, `..`
//! resolution and existence checking.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use locus::{Host, LocationKind};

/// Print the canonical path of an existing file or folder.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve
    pub path: String,

    /// Resolve as a file instead of a folder
    #[arg(long)]
    pub file: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let kind = if self.file {
            LocationKind::File
        } else {
            LocationKind::Folder
        };

        let host = Host::os();
        let resolved = host.resolver().resolve(&self.path, kind)?;

        println!("{resolved}");
        Ok(())
    }
}
