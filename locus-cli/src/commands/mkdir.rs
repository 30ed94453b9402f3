//! Mkdir command implementation.

use crate::error::CliError;
use crate::utils::{creation_target, GlobalOptions};
use clap::Args;
use locus::{Host, Location};

/// Create a folder and any missing parents.
#[derive(Args)]
pub struct MkdirCommand {
    /// Path of the folder to create
    pub path: String,

    /// Succeed if the folder already exists
    #[arg(long, short = 'p')]
    pub if_needed: bool,
}

impl MkdirCommand {
    /// Execute the mkdir command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (anchor, rest) = creation_target(&Host::os(), &self.path)?;

        let folder = if self.if_needed {
            anchor.create_subfolder_if_needed(&rest)?
        } else {
            anchor.create_subfolder(&rest)?
        };

        if !global.quiet {
            println!("{}", folder.path());
        }
        Ok(())
    }
}
