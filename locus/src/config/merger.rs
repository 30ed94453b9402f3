//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use locus::config::{Config, ConfigMerger};
///
/// let low = Config { recursive: Some(false), ..Default::default() };
/// let high = Config { recursive: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.recursive, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.include_hidden.is_some() {
            target.include_hidden = source.include_hidden;
        }

        if source.recursive.is_some() {
            target.recursive = source.recursive;
        }

        if source.keep_extension.is_some() {
            target.keep_extension = source.keep_extension;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
