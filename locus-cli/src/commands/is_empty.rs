//! Is-empty command implementation.
//!
//! Exits with status 0 when the folder has no entries and 1 otherwise, so
//! it can be used directly in shell conditionals.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use locus::{Host, Location};

/// Check whether a folder is empty.
#[derive(Args)]
pub struct IsEmptyCommand {
    /// Folder to check
    pub folder: String,

    /// Count hidden entries too
    #[arg(long, short = 'a')]
    pub all: bool,
}

impl IsEmptyCommand {
    /// Execute the is-empty command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let include_hidden = self.all || config.include_hidden();

        let folder = Host::os().folder(&self.folder)?;
        if folder.is_empty(include_hidden) {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Folder is not empty: {}",
                folder.path()
            )))
        }
    }
}
