//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// A parsed configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the user config and explicitly named files.
///
/// # Examples
///
/// ```no_run
/// use fpath::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load every applicable configuration file, lowest precedence first.
    ///
    /// The user config at `~/.fpath/config.yaml` is used when it exists. An
    /// explicit file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that is used cannot be read or parsed.
    pub fn load_all(explicit: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                let config = Self::load_file(&path)?;
                sources.push(ConfigSource { path, config });
            }
        }

        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                config,
            });
        }

        Ok(sources)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;
        log::debug!("loading configuration from {}", path.display());

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&contents).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            reason: format!("Invalid YAML: {e}"),
        })
    }

    /// Get the user config file path, if a home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".fpath").join("config.yaml"))
    }
}
