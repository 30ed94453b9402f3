//! Info command implementation.
//!
//! Shows what a path resolves to: its kind, name parts, parent folder and
//! timestamps.

use crate::error::CliError;
use crate::utils::{
    format_optional_timestamp, load_configuration, shorten_path, Entry, GlobalOptions,
};
use clap::Args;
use locus::{Host, Location, OutputFormat};

/// Display information about a file or folder.
#[derive(Args)]
pub struct InfoCommand {
    /// Path of the file or folder
    pub path: String,

    /// Output format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Show full paths instead of shortened forms
    #[arg(long)]
    pub show_full_paths: bool,
}

/// Everything `info` reports, gathered once for either output format.
struct Details {
    kind: String,
    name: String,
    stem: String,
    extension: Option<String>,
    path: String,
    parent: Option<String>,
    created: String,
    modified: String,
}

impl Details {
    fn of<L: Location>(location: &L) -> Self {
        Self {
            kind: L::KIND.to_string(),
            name: location.name().to_string(),
            stem: location.name_excluding_extension(),
            extension: location.extension().map(str::to_string),
            path: location.path().to_string(),
            parent: location.parent().map(|parent| parent.path().to_string()),
            created: format_optional_timestamp(location.creation_date()),
            modified: format_optional_timestamp(location.modification_date()),
        }
    }
}

impl InfoCommand {
    /// Execute the info command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = self.format.unwrap_or_else(|| config.output_format());

        let details = match Entry::resolve(&Host::os(), &self.path)? {
            Entry::File(file) => Details::of(&file),
            Entry::Folder(folder) => Details::of(&folder),
        };

        match format {
            OutputFormat::Human => {
                let display = |path: &str| {
                    if self.show_full_paths {
                        path.to_string()
                    } else {
                        shorten_path(path)
                    }
                };
                println!("kind:      {}", details.kind);
                println!("name:      {}", details.name);
                println!("stem:      {}", details.stem);
                println!("extension: {}", details.extension.as_deref().unwrap_or("-"));
                println!("path:      {}", display(&details.path));
                println!(
                    "parent:    {}",
                    details.parent.as_deref().map_or_else(|| "-".to_string(), display)
                );
                println!("created:   {}", details.created);
                println!("modified:  {}", details.modified);
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "kind": details.kind,
                    "name": details.name,
                    "stem": details.stem,
                    "extension": details.extension,
                    "path": details.path,
                    "parent": details.parent,
                    "created": details.created,
                    "modified": details.modified,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }

        Ok(())
    }
}
