//! Commands that consult the current directory or the filesystem.

use crate::error::CliError;
use crate::output::{self, json_text, OutputFormat};
use crate::utils::{path_arg, path_args, GlobalOptions};
use clap::Args;
use fpath::{PathEngine, PathValue};
use serde::Serialize;
use std::ffi::OsString;

/// Make paths absolute against the current directory.
#[derive(Args)]
pub struct AbspathCommand {
    /// Paths to make absolute
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl AbspathCommand {
    pub fn execute(self, global: &GlobalOptions, engine: &PathEngine) -> Result<(), CliError> {
        let results = path_args(self.paths, global)?
            .into_iter()
            .map(|path| engine.abspath(path))
            .collect::<Result<Vec<_>, _>>()?;
        output::print_paths(global.format, &results)
    }
}

#[derive(Serialize)]
struct ResolutionRecord {
    path: String,
    original: String,
    hops: usize,
}

/// Resolve paths by following symlinks.
///
/// Components that do not exist are kept as written.
#[derive(Args)]
pub struct RealpathCommand {
    /// Paths to resolve
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,

    /// Also report how many symlinks were followed
    #[arg(long)]
    pub hops: bool,
}

impl RealpathCommand {
    pub fn execute(self, global: &GlobalOptions, engine: &PathEngine) -> Result<(), CliError> {
        let resolved = path_args(self.paths, global)?
            .into_iter()
            .map(|path| engine.resolve(path))
            .collect::<Result<Vec<_>, _>>()?;

        match (global.format, self.hops) {
            (OutputFormat::Json, true) => {
                let records = resolved
                    .iter()
                    .map(|r| {
                        Ok(ResolutionRecord {
                            path: json_text(r.path())?,
                            original: json_text(r.original())?,
                            hops: r.hops(),
                        })
                    })
                    .collect::<Result<Vec<_>, CliError>>()?;
                output::print_document(&records)
            }
            (OutputFormat::Plain, true) => {
                let lines: Vec<PathValue> = resolved
                    .iter()
                    .map(|r| {
                        let mut line = r.path().as_bytes().to_vec();
                        line.extend_from_slice(format!("\t{}", r.hops()).as_bytes());
                        PathValue::Bytes(line)
                    })
                    .collect();
                output::print_paths(global.format, &lines)
            }
            (_, false) => {
                let paths: Vec<PathValue> = resolved
                    .into_iter()
                    .map(fpath::ResolvedPath::into_path_value)
                    .collect();
                output::print_paths(global.format, &paths)
            }
        }
    }
}

/// Compute the relative path from START (default: the current directory).
#[derive(Args)]
pub struct RelpathCommand {
    /// Target path
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// Directory the result is relative to
    #[arg(value_name = "START")]
    pub start: Option<OsString>,
}

impl RelpathCommand {
    pub fn execute(self, global: &GlobalOptions, engine: &PathEngine) -> Result<(), CliError> {
        let path = path_arg(self.path, global)?;
        let result = match self.start {
            Some(start) => engine.relpath_from(path, path_arg(start, global)?)?,
            None => engine.relpath(path)?,
        };
        output::print_paths(global.format, &[result])
    }
}
