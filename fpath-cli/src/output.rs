//! Writing results to stdout.
//!
//! Plain output writes each path's raw bytes followed by a newline, so byte
//! paths that are not valid UTF-8 survive a round trip through a shell pipe.
//! JSON output needs text, and fails with an encoding violation for any path
//! that does not decode.

use crate::error::CliError;
use clap::ValueEnum;
use fpath::PathValue;
use serde::Serialize;
use std::io::{self, Write};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw bytes, one value per line
    #[default]
    Plain,
    /// A single JSON document
    Json,
}

/// Decode a path for inclusion in a JSON document.
pub fn json_text(value: &PathValue) -> Result<String, CliError> {
    let decoded = value.decode()?;
    Ok(decoded.to_string_lossy().into_owned())
}

/// Write one line per path.
pub fn write_lines<W: Write>(out: &mut W, values: &[PathValue]) -> io::Result<()> {
    for value in values {
        out.write_all(value.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write a JSON document followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, document: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, document)?;
    out.write_all(b"\n")
}

/// Print paths in the selected format.
///
/// JSON renders a list of strings.
pub fn print_paths(format: OutputFormat, values: &[PathValue]) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Plain => write_lines(&mut out, values)?,
        OutputFormat::Json => {
            let texts = values.iter().map(json_text).collect::<Result<Vec<_>, _>>()?;
            write_json(&mut out, &texts)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Print a JSON document.
pub fn print_document<T: Serialize + ?Sized>(document: &T) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, document)?;
    out.flush()?;
    Ok(())
}
