//! Command implementations.
//!
//! Every path command loads the merged configuration first. Only the
//! commands that consult the system use the [`PathEngine`](fpath::PathEngine)
//! built from it.

pub mod completions;
pub mod expand;
pub mod lexical;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use expand::{ExpanduserCommand, ExpandvarsCommand};
pub use lexical::{
    BasenameCommand, DirnameCommand, IsabsCommand, JoinCommand, NormpathCommand, SplitCommand,
    SplitextCommand,
};
pub use resolve::{AbspathCommand, RealpathCommand, RelpathCommand};
pub use validate::ValidateCommand;

use crate::cli::PathCommand;
use crate::error::CliError;
use crate::utils::{self, GlobalOptions};

/// Run a path command.
pub fn run_path_command(command: PathCommand, global: &GlobalOptions) -> Result<(), CliError> {
    let config = match utils::load_configuration(global) {
        Ok(config) => config,
        Err(e) => {
            utils::install_logger(global, None);
            return Err(e);
        }
    };
    utils::install_logger(global, Some(&config));
    let engine = utils::build_engine(&config);
    log::debug!("using {engine:?}");

    match command {
        PathCommand::Join(cmd) => cmd.execute(global),
        PathCommand::Split(cmd) => cmd.execute(global),
        PathCommand::Splitext(cmd) => cmd.execute(global),
        PathCommand::Basename(cmd) => cmd.execute(global),
        PathCommand::Dirname(cmd) => cmd.execute(global),
        PathCommand::Normpath(cmd) => cmd.execute(global),
        PathCommand::Isabs(cmd) => cmd.execute(global),
        PathCommand::Abspath(cmd) => cmd.execute(global, &engine),
        PathCommand::Realpath(cmd) => cmd.execute(global, &engine),
        PathCommand::Relpath(cmd) => cmd.execute(global, &engine),
        PathCommand::Expanduser(cmd) => cmd.execute(global, &engine),
        PathCommand::Expandvars(cmd) => cmd.execute(global, &engine),
    }
}
