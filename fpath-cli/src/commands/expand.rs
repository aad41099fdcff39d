//! Home directory and environment variable expansion.

use crate::error::CliError;
use crate::output;
use crate::utils::{path_args, GlobalOptions};
use clap::Args;
use fpath::PathEngine;
use std::ffi::OsString;

/// Expand a leading `~` or `~user` in each path.
///
/// Unknown users leave the path unchanged.
#[derive(Args)]
pub struct ExpanduserCommand {
    /// Paths to expand
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl ExpanduserCommand {
    pub fn execute(self, global: &GlobalOptions, engine: &PathEngine) -> Result<(), CliError> {
        let results = path_args(self.paths, global)?
            .into_iter()
            .map(|path| engine.expanduser(path))
            .collect::<Result<Vec<_>, _>>()?;
        output::print_paths(global.format, &results)
    }
}

/// Expand `$VAR` and `${VAR}` references in each path.
///
/// Unset variables are left as written.
#[derive(Args)]
pub struct ExpandvarsCommand {
    /// Paths to expand
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl ExpandvarsCommand {
    pub fn execute(self, global: &GlobalOptions, engine: &PathEngine) -> Result<(), CliError> {
        let results = path_args(self.paths, global)?
            .into_iter()
            .map(|path| engine.expandvars(path))
            .collect::<Result<Vec<_>, _>>()?;
        output::print_paths(global.format, &results)
    }
}
