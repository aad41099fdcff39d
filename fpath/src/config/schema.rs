//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Symlink substitutions allowed per resolution when nothing else is set.
pub const DEFAULT_MAX_SYMLINK_DEPTH: usize = 40;

/// Upper bound accepted for `max_symlink_depth`.
pub const MAX_SYMLINK_DEPTH_LIMIT: usize = 1024;

/// Where named users' home directories are looked up by default.
pub const DEFAULT_PASSWD_FILE: &str = "/etc/passwd";

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields fall
/// back to the defaults above.
///
/// # Examples
///
/// ```
/// use fpath::config::Config;
///
/// let config: Config = serde_yaml::from_str("max_symlink_depth: 8").unwrap();
/// assert_eq!(config.max_symlink_depth, Some(8));
/// assert_eq!(config.symlink_depth(), 8);
/// assert_eq!(Config::default().symlink_depth(), 40);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of symlink substitutions in one resolution.
    pub max_symlink_depth: Option<usize>,

    /// Passwd-format file used to find other users' home directories.
    pub passwd_file: Option<PathBuf>,

    /// Default verbosity for front ends.
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// The effective symlink depth ceiling.
    #[must_use]
    pub fn symlink_depth(&self) -> usize {
        self.max_symlink_depth.unwrap_or(DEFAULT_MAX_SYMLINK_DEPTH)
    }

    /// The effective passwd file.
    #[must_use]
    pub fn passwd_path(&self) -> PathBuf {
        self.passwd_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PASSWD_FILE))
    }
}
