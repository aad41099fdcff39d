//! Commands that never touch the filesystem.

use crate::error::CliError;
use crate::output::{self, json_text};
use crate::utils::{path_arg, path_args, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::ffi::OsString;

/// Join a base path with fragments.
///
/// An absolute fragment discards everything before it.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: OsString,

    /// Fragments appended in order
    #[arg(value_name = "FRAGMENT")]
    pub fragments: Vec<OsString>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let base = path_arg(self.base, global)?;
        let fragments = path_args(self.fragments, global)?;
        let joined = fpath::join(base, fragments)?;
        output::print_paths(global.format, &[joined])
    }
}

#[derive(Serialize)]
struct SplitRecord {
    head: String,
    tail: String,
}

#[derive(Serialize)]
struct SplitextRecord {
    root: String,
    ext: String,
}

/// Split a path into head and tail.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (head, tail) = fpath::split(path_arg(self.path, global)?)?;
        if global.format == output::OutputFormat::Json {
            let record = SplitRecord {
                head: json_text(&head)?,
                tail: json_text(&tail)?,
            };
            return output::print_document(&record);
        }
        output::print_paths(global.format, &[head, tail])
    }
}

/// Split a path into root and extension.
#[derive(Args)]
pub struct SplitextCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl SplitextCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (root, ext) = fpath::splitext(path_arg(self.path, global)?)?;
        if global.format == output::OutputFormat::Json {
            let record = SplitextRecord {
                root: json_text(&root)?,
                ext: json_text(&ext)?,
            };
            return output::print_document(&record);
        }
        output::print_paths(global.format, &[root, ext])
    }
}

/// Print the final component of each path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Paths to examine
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let results = path_args(self.paths, global)?
            .into_iter()
            .map(fpath::basename)
            .collect::<Result<Vec<_>, _>>()?;
        output::print_paths(global.format, &results)
    }
}

/// Print the directory part of each path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Paths to examine
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let results = path_args(self.paths, global)?
            .into_iter()
            .map(fpath::dirname)
            .collect::<Result<Vec<_>, _>>()?;
        output::print_paths(global.format, &results)
    }
}

/// Normalize paths lexically.
#[derive(Args)]
pub struct NormpathCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl NormpathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let results = path_args(self.paths, global)?
            .into_iter()
            .map(fpath::normpath)
            .collect::<Result<Vec<_>, _>>()?;
        output::print_paths(global.format, &results)
    }
}

#[derive(Serialize)]
struct IsabsRecord {
    path: String,
    absolute: bool,
}

/// Test whether paths are absolute.
///
/// Prints `true` or `false` per path and exits with 1 if any is relative.
#[derive(Args)]
pub struct IsabsCommand {
    /// Paths to test
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl IsabsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let paths = path_args(self.paths, global)?;
        let mut answers = Vec::with_capacity(paths.len());
        for path in &paths {
            answers.push(fpath::isabs(path)?);
        }

        if global.format == output::OutputFormat::Json {
            let records = paths
                .iter()
                .zip(&answers)
                .map(|(path, &absolute)| {
                    Ok(IsabsRecord {
                        path: json_text(path)?,
                        absolute,
                    })
                })
                .collect::<Result<Vec<_>, CliError>>()?;
            output::print_document(&records)?;
        } else if !global.quiet {
            let lines: Vec<_> = answers
                .iter()
                .map(|&absolute| fpath::PathValue::from(if absolute { "true" } else { "false" }))
                .collect();
            output::print_paths(global.format, &lines)?;
        }

        match paths.iter().zip(&answers).find(|(_, absolute)| !**absolute) {
            Some((path, _)) => Err(CliError::SemanticFailure(format!(
                "Not an absolute path: {path}"
            ))),
            None => Ok(()),
        }
    }
}
