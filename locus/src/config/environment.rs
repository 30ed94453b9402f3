//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `LOCUS_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use locus::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid boolean or output
    /// format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("LOCUS_INCLUDE_HIDDEN") {
            config.include_hidden = Some(Self::parse_bool("LOCUS_INCLUDE_HIDDEN", &val)?);
        }

        if let Ok(val) = env::var("LOCUS_RECURSIVE") {
            config.recursive = Some(Self::parse_bool("LOCUS_RECURSIVE", &val)?);
        }

        if let Ok(val) = env::var("LOCUS_KEEP_EXTENSION") {
            config.keep_extension = Some(Self::parse_bool("LOCUS_KEEP_EXTENSION", &val)?);
        }

        if let Ok(val) = env::var("LOCUS_OUTPUT_FORMAT") {
            let format = val.parse::<OutputFormat>().map_err(|message| Error::Configuration {
                message: format!("LOCUS_OUTPUT_FORMAT: {message}"),
            })?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Configuration {
                message: format!(
                    "{field}: invalid boolean value '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
