//! POSIX path handling over byte and text paths.
//!
//! This module contains the whole engine. The byte-level building blocks are
//! exposed for callers that want to work with segmented paths directly; most
//! callers only need the encoding-preserving functions re-exported at the
//! crate root and the [`PathEngine`].
//!
//! # Key Concepts
//!
//! ## Segmentation
//!
//! A path splits into a root descriptor (none, `/`, or the POSIX
//! distinguished `//`), its components, and a trailing-separator flag. See
//! [`segment`](segment::segment).
//!
//! ## Normalization
//!
//! Normalization is purely lexical: `.` disappears, `..` consumes the name
//! before it, and `..` at an absolute root is dropped. See
//! [`normalize`](normalize::normalize).
//!
//! ## Resolution
//!
//! Resolution follows symbolic links one component at a time through a
//! [`FileSystem`](crate::context::FileSystem) collaborator, failing on cycles
//! and on chains longer than the configured ceiling.
//!
//! ## Encoding duality
//!
//! Every public operation returns a [`PathValue`] whose [`Encoding`] matches
//! its primary argument. Mixing encodings in one call and embedded NULs are
//! rejected before any work starts.
//!
//! # Examples
//!
//! ```
//! use fpath::path::normalize::normpath_bytes;
//! use fpath::path::segment::{segment, Root};
//!
//! let parsed = segment(b"//srv/./data/");
//! assert_eq!(parsed.root(), Root::Double);
//! assert!(parsed.has_trailing_separator());
//!
//! assert_eq!(normpath_bytes(b"a/../../b"), b"../b");
//! ```

pub mod absolute;
pub mod canonicalize;
pub mod engine;
pub mod expand;
pub mod join;
pub mod normalize;
pub mod pure;
pub mod relative;
pub mod segment;
pub mod split;
mod types;

#[cfg(test)]
mod proptests;

pub use engine::PathEngine;
pub use types::{Encoding, PathValue, ResolvedPath};

/// The path separator.
pub const SEP: u8 = b'/';

/// The current-directory token.
pub const CURDIR: &[u8] = b".";

/// The parent-directory token.
pub const PARDIR: &[u8] = b"..";

/// The extension separator.
pub const EXTSEP: u8 = b'.';
