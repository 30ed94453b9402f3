//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, target resolution and output
//! formatting.

use crate::error::CliError;
use locus::path::normalize;
use locus::{Config, ConfigBuilder, File, Folder, Host, Location, LocationKind};
use std::path::Path;
use std::time::SystemTime;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Project `locus.yaml`
/// 3. User `~/.locus/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(_global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// A resolved command target of either kind.
#[derive(Debug, Clone)]
pub enum Entry {
    /// The target is a file.
    File(File),
    /// The target is a folder.
    Folder(Folder),
}

impl Entry {
    /// Resolve `path` as a file, falling back to a folder.
    ///
    /// The error of the folder attempt is reported when neither exists,
    /// unless the file attempt failed for a reason other than absence.
    pub fn resolve(host: &Host, path: &str) -> Result<Self, CliError> {
        match host.file(path) {
            Ok(file) => Ok(Entry::File(file)),
            Err(err) if err.is_missing() => Ok(Entry::Folder(host.folder(path)?)),
            Err(err) => Err(err.into()),
        }
    }

    /// The kind of location this entry is.
    pub fn kind(&self) -> LocationKind {
        match self {
            Entry::File(_) => LocationKind::File,
            Entry::Folder(_) => LocationKind::Folder,
        }
    }

    /// The canonical path.
    pub fn path(&self) -> &str {
        match self {
            Entry::File(file) => file.path(),
            Entry::Folder(folder) => folder.path(),
        }
    }
}

/// Split a path that may not exist yet into an existing anchor folder and
/// the remainder to create beneath it.
///
/// `~` is expanded and relative paths are anchored at the working directory
/// before splitting at the root.
pub fn creation_target(host: &Host, path: &str) -> Result<(Folder, String), CliError> {
    if path.is_empty() {
        return Err(CliError::InvalidArguments("path is empty".to_string()));
    }
    let fs = host.fs();
    let path = normalize::expand_tilde(path, || fs.home_dir())?;
    let path = normalize::make_absolute(&path, || fs.current_dir())?;
    let rest = normalize::without_leading_separator(&path).to_string();
    Ok((host.root_folder()?, rest))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format an optional timestamp, using `-` when it is unavailable.
pub fn format_optional_timestamp(ts: Option<SystemTime>) -> String {
    ts.map_or_else(|| "-".to_string(), format_timestamp)
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &str) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = Path::new(path).strip_prefix(&home) {
            let relative = relative.display().to_string();
            if relative.is_empty() {
                return "~".to_string();
            }
            let trailing = if path.ends_with('/') { "/" } else { "" };
            return format!("~/{relative}{trailing}");
        }
    }
    path.to_string()
}
