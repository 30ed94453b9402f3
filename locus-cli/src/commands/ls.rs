//! Ls command implementation.
//!
//! This module implements the `ls` command, which lists the children of a
//! folder in traversal order. Defaults for hidden entries, recursion and the
//! output format come from the configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use locus::{Folder, Host, Location, LocationKind, OutputFormat};
use std::io::Write;

/// List the files and subfolders of a folder.
#[derive(Args)]
pub struct LsCommand {
    /// Folder to list (defaults to the current directory)
    pub path: Option<String>,

    /// Only list files
    #[arg(long, conflicts_with = "folders")]
    pub files: bool,

    /// Only list subfolders
    #[arg(long)]
    pub folders: bool,

    /// Descend into subfolders
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Include hidden entries
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// One listed child.
struct Listed {
    kind: LocationKind,
    relative: String,
    path: String,
}

impl LsCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration for defaults
        let config = load_configuration(global)?;
        let include_hidden = self.all || config.include_hidden();
        let recursive = self.recursive || config.recursive();
        let format = self.format.unwrap_or_else(|| config.output_format());

        // 2. Resolve the folder and walk it
        let folder = Host::os().folder(self.path.as_deref().unwrap_or_default())?;
        let mut listed = Vec::new();

        if !self.files {
            let mut subfolders = folder.subfolders().with_hidden(include_hidden);
            if recursive {
                subfolders = subfolders.recursive();
            }
            listed.extend(subfolders.iter().map(|child| listed_entry(&folder, &child)));
        }

        if !self.folders {
            let mut files = folder.files_sequence().with_hidden(include_hidden);
            if recursive {
                files = files.recursive();
            }
            listed.extend(files.iter().map(|child| listed_entry(&folder, &child)));
        }

        log::debug!("Listed {} entries under {}", listed.len(), folder.path());

        // 3. Format and output to stdout
        match format {
            OutputFormat::Human => format_as_lines(&listed),
            OutputFormat::Json => format_as_json(&listed),
        }
    }
}

fn listed_entry<L: Location>(folder: &Folder, child: &L) -> Listed {
    Listed {
        kind: L::KIND,
        relative: child.path_relative_to(folder),
        path: child.path().to_string(),
    }
}

/// Print one relative path per line, marking folders with a trailing `/`.
fn format_as_lines(listed: &[Listed]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for entry in listed {
        match entry.kind {
            LocationKind::Folder => writeln!(handle, "{}/", entry.relative)?,
            LocationKind::File => writeln!(handle, "{}", entry.relative)?,
        }
    }

    Ok(())
}

/// Print the listing as a JSON array.
fn format_as_json(listed: &[Listed]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = listed
        .iter()
        .map(|entry| {
            serde_json::json!({
                "kind": entry.kind.to_string(),
                "name": entry.relative,
                "path": entry.path,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)?;
    writeln!(handle)?;

    Ok(())
}
