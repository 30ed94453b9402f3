//! Touch command implementation.

use crate::error::CliError;
use crate::utils::{creation_target, GlobalOptions};
use clap::Args;
use locus::{Host, Location};

/// Create an empty file unless it already exists.
#[derive(Args)]
pub struct TouchCommand {
    /// Path of the file
    pub path: String,
}

impl TouchCommand {
    /// Execute the touch command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (anchor, rest) = creation_target(&Host::os(), &self.path)?;
        let file = anchor.create_file_if_needed(&rest, Vec::new)?;

        if !global.quiet {
            println!("{}", file.path());
        }
        Ok(())
    }
}
