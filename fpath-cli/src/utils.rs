//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared across commands: turning raw
//! arguments into path values, loading configuration, and installing
//! the logger.

use crate::error::CliError;
use crate::output::OutputFormat;
use fpath::{Config, ConfigBuilder, Encoding, Logger, PathEngine, PathValue};
use std::ffi::OsString;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Extra configuration file, above the user config.
    pub config: Option<PathBuf>,

    /// Override the symlink depth ceiling.
    pub max_symlink_depth: Option<usize>,

    /// Output format.
    pub format: OutputFormat,

    /// Treat arguments as text paths instead of byte paths.
    pub text: bool,
}

impl GlobalOptions {
    /// The encoding arguments are read in.
    pub fn encoding(&self) -> Encoding {
        if self.text {
            Encoding::Text
        } else {
            Encoding::Bytes
        }
    }
}

/// Convert a raw argument into a path value.
///
/// Arguments are bytes by default. With `--text` they must decode as UTF-8.
pub fn path_arg(arg: OsString, global: &GlobalOptions) -> Result<PathValue, CliError> {
    let value = PathValue::from_encoded(global.encoding(), os_bytes(arg))?;
    Ok(value)
}

/// Convert every argument, stopping at the first bad one.
pub fn path_args(args: Vec<OsString>, global: &GlobalOptions) -> Result<Vec<PathValue>, CliError> {
    args.into_iter().map(|arg| path_arg(arg, global)).collect()
}

#[cfg(unix)]
fn os_bytes(arg: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;

    arg.into_vec()
}

#[cfg(not(unix))]
fn os_bytes(arg: OsString) -> Vec<u8> {
    arg.to_string_lossy().into_owned().into_bytes()
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }
    if global.max_symlink_depth.is_some() {
        builder = builder.with_config(Config {
            max_symlink_depth: global.max_symlink_depth,
            ..Config::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build the engine for context-dependent commands.
pub fn build_engine(config: &Config) -> PathEngine {
    PathEngine::from_config(config)
}

/// Install the stderr logger.
///
/// `--verbose` and `--quiet` win over the configured `log_mode`, which in
/// turn already includes `FPATH_LOG_MODE`.
pub fn install_logger(global: &GlobalOptions, config: Option<&Config>) {
    let logger = match config.and_then(|c| c.log_mode) {
        Some(level) if !global.verbose && !global.quiet => Logger::new(level),
        _ => fpath::init_logger(global.verbose, global.quiet),
    };
    // A logger can only be installed once per process; later calls are no-ops.
    let _ = logger.install();
}
