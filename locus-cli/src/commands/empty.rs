//! Empty command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use locus::Host;

/// Delete every file and subfolder inside a folder.
#[derive(Args)]
pub struct EmptyCommand {
    /// Folder to empty
    pub folder: String,

    /// Also delete hidden entries
    #[arg(long, short = 'a')]
    pub all: bool,
}

impl EmptyCommand {
    /// Execute the empty command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let include_hidden = self.all || config.include_hidden();

        Host::os().folder(&self.folder)?.empty(include_hidden)?;
        Ok(())
    }
}
