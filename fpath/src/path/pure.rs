//! Encoding-preserving entry points for the lexical operations.
//!
//! None of these consult any context. Each one validates its arguments,
//! runs the byte-level implementation, and hands the result back in the
//! primary argument's encoding.

use crate::error::Result;
use crate::path::join::join_bytes;
use crate::path::normalize::normpath_bytes;
use crate::path::segment::is_absolute;
use crate::path::split::{basename_bytes, dirname_bytes, split_bytes, splitext_bytes};
use crate::path::types::check_arguments;
use crate::path::PathValue;

/// Join `base` with each of `fragments`.
///
/// An absolute fragment discards everything before it. See
/// [`join_bytes`](crate::path::join::join_bytes).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
/// fragments do not all share `base`'s encoding, and
/// [`Error::EncodingViolation`](crate::Error::EncodingViolation) if any
/// argument contains NUL.
///
/// # Examples
///
/// ```
/// use fpath::{join, PathValue};
///
/// assert_eq!(join("/usr", ["local", "bin"]).unwrap(), "/usr/local/bin");
/// assert_eq!(join("/a/b", ["c", "/d/e"]).unwrap(), "/d/e");
///
/// let mixed = join("/usr", [PathValue::from(&b"lib"[..])]);
/// assert!(mixed.is_err());
/// ```
pub fn join<B, I>(base: B, fragments: I) -> Result<PathValue>
where
    B: Into<PathValue>,
    I: IntoIterator,
    I::Item: Into<PathValue>,
{
    let base = base.into();
    let fragments: Vec<PathValue> = fragments.into_iter().map(Into::into).collect();
    check_arguments(&base, &fragments)?;

    base.rewrap(join_bytes(
        base.as_bytes(),
        fragments.iter().map(PathValue::as_bytes),
    ))
}

/// Split a path into `(head, tail)` at the last separator.
///
/// # Errors
///
/// Returns [`Error::EncodingViolation`](crate::Error::EncodingViolation) if
/// the path contains NUL.
///
/// # Examples
///
/// ```
/// use fpath::split;
///
/// let (head, tail) = split("/a/b/c.txt").unwrap();
/// assert_eq!(head, "/a/b");
/// assert_eq!(tail, "c.txt");
///
/// let (head, tail) = split("/").unwrap();
/// assert_eq!(head, "/");
/// assert_eq!(tail, "");
/// ```
pub fn split(path: impl Into<PathValue>) -> Result<(PathValue, PathValue)> {
    let path = path.into();
    check_arguments(&path, [])?;
    let (head, tail) = split_bytes(path.as_bytes());
    Ok((path.rewrap(head.to_vec())?, path.rewrap(tail.to_vec())?))
}

/// Split a path into `(root, ext)`.
///
/// # Errors
///
/// Returns [`Error::EncodingViolation`](crate::Error::EncodingViolation) if
/// the path contains NUL.
///
/// # Examples
///
/// ```
/// use fpath::splitext;
///
/// let (root, ext) = splitext("c.txt").unwrap();
/// assert_eq!(root, "c");
/// assert_eq!(ext, ".txt");
///
/// let (root, ext) = splitext("/home/.profile").unwrap();
/// assert_eq!(root, "/home/.profile");
/// assert_eq!(ext, "");
/// ```
pub fn splitext(path: impl Into<PathValue>) -> Result<(PathValue, PathValue)> {
    let path = path.into();
    check_arguments(&path, [])?;
    let (root, ext) = splitext_bytes(path.as_bytes());
    Ok((path.rewrap(root.to_vec())?, path.rewrap(ext.to_vec())?))
}

/// The final component of a path.
///
/// # Errors
///
/// Returns [`Error::EncodingViolation`](crate::Error::EncodingViolation) if
/// the path contains NUL.
pub fn basename(path: impl Into<PathValue>) -> Result<PathValue> {
    let path = path.into();
    check_arguments(&path, [])?;
    path.rewrap(basename_bytes(path.as_bytes()).to_vec())
}

/// Everything before the final component of a path.
///
/// # Errors
///
/// Returns [`Error::EncodingViolation`](crate::Error::EncodingViolation) if
/// the path contains NUL.
pub fn dirname(path: impl Into<PathValue>) -> Result<PathValue> {
    let path = path.into();
    check_arguments(&path, [])?;
    path.rewrap(dirname_bytes(path.as_bytes()).to_vec())
}

/// Normalize a path lexically.
///
/// # Errors
///
/// Returns [`Error::EncodingViolation`](crate::Error::EncodingViolation) if
/// the path contains NUL.
///
/// # Examples
///
/// ```
/// use fpath::normpath;
///
/// assert_eq!(normpath("/a/./b/../c").unwrap(), "/a/c");
/// assert_eq!(normpath("a/../../b").unwrap(), "../b");
/// assert_eq!(normpath(&b"//x/"[..]).unwrap(), &b"//x/"[..]);
/// ```
pub fn normpath(path: impl Into<PathValue>) -> Result<PathValue> {
    let path = path.into();
    check_arguments(&path, [])?;
    path.rewrap(normpath_bytes(path.as_bytes()))
}

/// Check whether a path is absolute.
///
/// # Errors
///
/// Returns [`Error::EncodingViolation`](crate::Error::EncodingViolation) if
/// the path contains NUL.
pub fn isabs(path: impl Into<PathValue>) -> Result<bool> {
    let path = path.into();
    check_arguments(&path, [])?;
    Ok(is_absolute(path.as_bytes()))
}
