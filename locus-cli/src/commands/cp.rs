//! Cp command implementation.

use crate::error::CliError;
use crate::utils::{Entry, GlobalOptions};
use clap::Args;
use locus::{Host, Location};

/// Copy a file or folder into another folder.
///
/// Folders are copied with everything inside them.
#[derive(Args)]
pub struct CopyCommand {
    /// Path of the file or folder to copy
    pub path: String,

    /// Destination folder
    pub folder: String,
}

impl CopyCommand {
    /// Execute the cp command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let host = Host::os();
        let destination = host.folder(&self.folder)?;

        let copy = match Entry::resolve(&host, &self.path)? {
            Entry::File(file) => file.copy_to(&destination)?.path().to_string(),
            Entry::Folder(folder) => folder.copy_to(&destination)?.path().to_string(),
        };

        if !global.quiet {
            println!("{copy}");
        }
        Ok(())
    }
}
