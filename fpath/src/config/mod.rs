//! Configuration system for fpath.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (the user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FPATH_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.fpath/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use fpath::config::ConfigBuilder;
//! use fpath::PathEngine;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let engine = PathEngine::from_config(&config);
//! println!("symlink ceiling: {}", engine.max_symlink_depth());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{
    Config, DEFAULT_MAX_SYMLINK_DEPTH, DEFAULT_PASSWD_FILE, MAX_SYMLINK_DEPTH_LIMIT,
};
pub use validator::ConfigValidator;
