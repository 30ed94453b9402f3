//! Mv command implementation.

use crate::error::CliError;
use crate::utils::{Entry, GlobalOptions};
use clap::Args;
use locus::{Host, Location};

/// Move a file or folder into another folder.
#[derive(Args)]
pub struct MoveCommand {
    /// Path of the file or folder to move
    pub path: String,

    /// Destination folder
    pub folder: String,
}

impl MoveCommand {
    /// Execute the mv command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let host = Host::os();
        let destination = host.folder(&self.folder)?;

        let moved = match Entry::resolve(&host, &self.path)? {
            Entry::File(mut file) => {
                file.move_to(&destination)?;
                file.path().to_string()
            }
            Entry::Folder(mut folder) => {
                folder.move_to(&destination)?;
                folder.path().to_string()
            }
        };

        if !global.quiet {
            println!("{moved}");
        }
        Ok(())
    }
}
