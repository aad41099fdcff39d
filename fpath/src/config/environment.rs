//! Environment variable handling for configuration overrides.
//!
//! This module provides support for FPATH_* environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use fpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `FPATH_MAX_SYMLINK_DEPTH`, `FPATH_PASSWD_FILE` and
    /// `FPATH_LOG_MODE`.
    ///
    /// # Errors
    ///
    /// Returns an error if `FPATH_MAX_SYMLINK_DEPTH` is not an integer.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(depth) = env::var("FPATH_MAX_SYMLINK_DEPTH") {
            config.max_symlink_depth = Some(Self::parse_depth(&depth)?);
        }

        if let Some(passwd) = env::var_os("FPATH_PASSWD_FILE") {
            if !passwd.is_empty() {
                config.passwd_file = Some(PathBuf::from(passwd));
            }
        }

        // An unknown mode falls back to the default and never fails a command.
        if let Ok(mode) = env::var("FPATH_LOG_MODE") {
            match LogLevel::parse(&mode) {
                Ok(level) => config.log_mode = Some(level),
                Err(message) => log::warn!("Ignoring FPATH_LOG_MODE: {message}"),
            }
        }

        Ok(())
    }

    fn parse_depth(s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: "FPATH_MAX_SYMLINK_DEPTH".into(),
            message: format!("Must be a positive integer, got '{s}'"),
        })
    }
}
