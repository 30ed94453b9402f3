//! Rm command implementation.

use crate::error::CliError;
use crate::utils::{Entry, GlobalOptions};
use clap::Args;
use locus::{Host, Location};

/// Delete a file, or a folder with everything inside it.
#[derive(Args)]
pub struct RemoveCommand {
    /// Path of the file or folder to delete
    pub path: String,
}

impl RemoveCommand {
    /// Execute the rm command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let entry = Entry::resolve(&Host::os(), &self.path)?;
        log::debug!("Deleting {} {}", entry.kind(), entry.path());

        match entry {
            Entry::File(file) => file.delete()?,
            Entry::Folder(folder) => folder.delete()?,
        }
        Ok(())
    }
}
