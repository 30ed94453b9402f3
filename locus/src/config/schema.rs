//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and overrides can be
//! layered; the accessor methods apply the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use locus::config::{Config, OutputFormat};
///
/// let config = Config {
///     include_hidden: Some(true),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert!(config.include_hidden());
/// assert!(!config.recursive());
/// assert!(config.keep_extension());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Visit entries whose names start with `.` when listing.
    pub include_hidden: Option<bool>,

    /// Visit subfolder contents when listing.
    pub recursive: Option<bool>,

    /// Keep the current extension when renaming.
    pub keep_extension: Option<bool>,

    /// Output format for listing and info commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Whether listings include hidden entries. Defaults to `false`.
    #[must_use]
    pub fn include_hidden(&self) -> bool {
        self.include_hidden.unwrap_or(false)
    }

    /// Whether listings recurse into subfolders. Defaults to `false`.
    #[must_use]
    pub fn recursive(&self) -> bool {
        self.recursive.unwrap_or(false)
    }

    /// Whether renames keep the extension. Defaults to `true`.
    #[must_use]
    pub fn keep_extension(&self) -> bool {
        self.keep_extension.unwrap_or(true)
    }

    /// The output format. Defaults to [`OutputFormat::Human`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format.
///
/// # Examples
///
/// ```
/// use locus::config::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per location, readable by people.
    #[default]
    Human,
    /// JSON output format.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: '{s}' (expected human or json)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.include_hidden());
        assert!(!config.recursive());
        assert!(config.keep_extension());
        assert_eq!(config.output_format(), OutputFormat::Human);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "include_hidden: true\noutput_format: json\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.include_hidden, Some(true));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.recursive, None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("colour: blue\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("HUMAN".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("table".parse::<OutputFormat>().is_err());
    }
}
