//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use fpath::config::{Config, ConfigMerger};
///
/// let low = Config { max_symlink_depth: Some(10), ..Default::default() };
/// let high = Config { max_symlink_depth: Some(20), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_symlink_depth, Some(20));
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
        if source.max_symlink_depth.is_some() {
            target.max_symlink_depth = source.max_symlink_depth;
        }
        if source.passwd_file.is_some() {
            target.passwd_file.clone_from(&source.passwd_file);
        }
        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }
    }
}
