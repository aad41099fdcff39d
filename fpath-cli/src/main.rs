//! Main entry point for the fpath CLI.
//!
//! This is the command-line interface for the fpath path engine. Each
//! public operation is a subcommand:
//! - lexical: `join`, `split`, `splitext`, `basename`, `dirname`, `normpath`, `isabs`
//! - context-dependent: `abspath`, `realpath`, `relpath`, `expanduser`, `expandvars`

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        max_symlink_depth: cli.max_symlink_depth,
        format: cli.format,
        text: cli.text,
    };

    // Execute the command
    let result = match cli.command {
        Command::Path(cmd) => commands::run_path_command(cmd, &global),
        Command::Validate(cmd) => {
            utils::install_logger(&global, None);
            cmd.execute(&global)
        }
        Command::Completions(cmd) => {
            utils::install_logger(&global, None);
            cmd.execute(&global)
        }
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
