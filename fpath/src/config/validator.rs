//! Configuration validation.

use crate::config::schema::{Config, MAX_SYMLINK_DEPTH_LIMIT};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use fpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero = Config { max_symlink_depth: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(depth) = config.max_symlink_depth {
            Self::validate_depth(depth)?;
        }
        if let Some(ref passwd) = config.passwd_file {
            if passwd.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "passwd_file".into(),
                    message: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }

    fn validate_depth(depth: usize) -> Result<()> {
        if depth == 0 {
            return Err(Error::Validation {
                field: "max_symlink_depth".into(),
                message: "must be greater than 0".into(),
            });
        }
        if depth > MAX_SYMLINK_DEPTH_LIMIT {
            return Err(Error::Validation {
                field: "max_symlink_depth".into(),
                message: format!("must be at most {MAX_SYMLINK_DEPTH_LIMIT}, got {depth}"),
            });
        }
        Ok(())
    }
}
