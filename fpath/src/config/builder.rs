//! Builder that assembles the final configuration from all sources.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a validated [`Config`].
///
/// # Examples
///
/// ```
/// use fpath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { max_symlink_depth: Some(16), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.symlink_depth(), 16);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also read `path`, above the user config.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `FPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer programmatic settings above every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge defaults, files, environment and overrides, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is malformed, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            ConfigMerger::merge(ConfigLoader::load_all(self.config_file.as_deref())?)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
