//! Rename command implementation.
//!
//! Renames a file or folder within its parent. Whether the current
//! extension is kept defaults to the `keep_extension` configuration value.

use crate::error::CliError;
use crate::utils::{load_configuration, Entry, GlobalOptions};
use clap::Args;
use locus::{Host, Location};

/// Rename a file or folder in place.
#[derive(Args)]
pub struct RenameCommand {
    /// Path of the file or folder
    pub path: String,

    /// New name
    pub name: String,

    /// Do not carry the current extension over to the new name
    #[arg(long)]
    pub drop_extension: bool,
}

impl RenameCommand {
    /// Execute the rename command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let keep_extension = !self.drop_extension && config.keep_extension();

        let renamed = match Entry::resolve(&Host::os(), &self.path)? {
            Entry::File(mut file) => {
                file.rename(&self.name, keep_extension)?;
                file.path().to_string()
            }
            Entry::Folder(mut folder) => {
                folder.rename(&self.name, keep_extension)?;
                folder.path().to_string()
            }
        };

        if !global.quiet {
            println!("{renamed}");
        }
        Ok(())
    }
}
