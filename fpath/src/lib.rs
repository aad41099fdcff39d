#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fpath
//!
//! A POSIX path manipulation engine that works uniformly over byte paths and
//! text paths.
//!
//! Every operation takes a [`PathValue`] (or anything convertible into one)
//! and returns a value carrying the same encoding tag as its primary argument:
//! bytes in, bytes out; text in, text out. Non-UTF-8 bytes survive untouched.
//!
//! ## Core Types
//!
//! - [`PathValue`] and [`Encoding`]: the tagged path representation
//! - [`PathEngine`]: context-dependent operations (cwd, environment, users, filesystem)
//! - [`Error`] and [`Result`]: discriminable failure kinds
//! - [`Config`] and [`ConfigBuilder`]: engine configuration
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fpath::{join, normpath, split, PathValue};
//!
//! assert_eq!(normpath("/a/./b/../c").unwrap(), "/a/c");
//! assert_eq!(join("/a/b", ["c", "/d/e"]).unwrap(), "/d/e");
//!
//! let (head, tail) = split("/a/b/c.txt").unwrap();
//! assert_eq!(head, "/a/b");
//! assert_eq!(tail, "c.txt");
//!
//! // Byte paths stay byte paths, including undecodable bytes.
//! let raw = PathValue::from(&b"/tmp/\xff/../x"[..]);
//! assert_eq!(normpath(raw).unwrap(), &b"/tmp/x"[..]);
//! ```
//!
//! Context-dependent operations go through a [`PathEngine`], which can be
//! built from in-memory collaborators for deterministic behaviour:
//!
//! ```
//! use fpath::context::memory::{FixedCurrentDir, MapEnvironment};
//! use fpath::PathEngine;
//!
//! let engine = PathEngine::new()
//!     .with_current_dir(FixedCurrentDir::new("/home/user"))
//!     .with_environment(MapEnvironment::new().with_var("PROJECT", "fpath"));
//!
//! assert_eq!(engine.abspath("src/../Cargo.toml").unwrap(), "/home/user/Cargo.toml");
//! assert_eq!(engine.expandvars("~/$PROJECT").unwrap(), "~/fpath");
//! assert_eq!(engine.relpath_from("/a/b/c", "/a/x/y").unwrap(), "../../b/c");
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::engine::{abspath, expanduser, expandvars, realpath, relpath, relpath_from};
pub use path::pure::{basename, dirname, isabs, join, normpath, split, splitext};
pub use path::{Encoding, PathEngine, PathValue, ResolvedPath};
