//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbspathCommand, BasenameCommand, CompletionsCommand, DirnameCommand, ExpanduserCommand,
    ExpandvarsCommand, IsabsCommand, JoinCommand, NormpathCommand, RealpathCommand,
    RelpathCommand, SplitCommand, SplitextCommand, ValidateCommand,
};
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for manipulating and resolving POSIX paths.
#[derive(Parser)]
#[command(name = "fpath")]
#[command(version, about = "Manipulate and resolve POSIX paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read an additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "FPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the maximum number of symlinks followed in one resolution
    #[arg(long, value_name = "N", global = true)]
    pub max_symlink_depth: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub format: OutputFormat,

    /// Treat arguments as UTF-8 text paths instead of raw bytes
    #[arg(long, global = true)]
    pub text: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    #[command(flatten)]
    Path(PathCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Commands that operate on paths.
#[derive(Subcommand)]
pub enum PathCommand {
    /// Join a base path with fragments
    Join(JoinCommand),

    /// Split a path into directory and final component
    Split(SplitCommand),

    /// Split a path into root and extension
    Splitext(SplitextCommand),

    /// Print the final component of each path
    Basename(BasenameCommand),

    /// Print everything before the final component of each path
    Dirname(DirnameCommand),

    /// Normalize paths lexically
    Normpath(NormpathCommand),

    /// Test whether paths are absolute
    Isabs(IsabsCommand),

    /// Make paths absolute against the current directory
    Abspath(AbspathCommand),

    /// Resolve paths by following symlinks
    Realpath(RealpathCommand),

    /// Compute a relative path from a start directory
    Relpath(RelpathCommand),

    /// Expand a leading ~ or ~user
    Expanduser(ExpanduserCommand),

    /// Expand $VAR and ${VAR} references
    Expandvars(ExpandvarsCommand),
}
