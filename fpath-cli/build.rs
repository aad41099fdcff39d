//! Build script for fpath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("fpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manipulate and resolve POSIX paths")
        .long_about(
            "Lexical path manipulation and symlink resolution over raw byte paths, \
             with an optional UTF-8 text mode",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read an additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("FPATH_CONFIG"),
        )
        .arg(
            Arg::new("max-symlink-depth")
                .long("max-symlink-depth")
                .help("Override the maximum number of symlinks followed in one resolution")
                .value_name("N")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["plain", "json"])
                .default_value("plain")
                .global(true),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .help("Treat arguments as UTF-8 text paths instead of raw bytes")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("join").about("Join a base path with fragments"),
            Command::new("split").about("Split a path into directory and final component"),
            Command::new("splitext").about("Split a path into root and extension"),
            Command::new("basename").about("Print the final component of each path"),
            Command::new("dirname")
                .about("Print everything before the final component of each path"),
            Command::new("normpath").about("Normalize paths lexically"),
            Command::new("isabs").about("Test whether paths are absolute"),
            Command::new("abspath").about("Make paths absolute against the current directory"),
            Command::new("realpath").about("Resolve paths by following symlinks"),
            Command::new("relpath").about("Compute a relative path from a start directory"),
            Command::new("expanduser").about("Expand a leading ~ or ~user"),
            Command::new("expandvars").about("Expand $VAR and ${VAR} references"),
            Command::new("validate").about("Validate a configuration file"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("fpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
