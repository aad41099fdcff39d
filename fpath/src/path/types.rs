//! Core types for path handling.
//!
//! This module defines the tagged path representation shared by every
//! operation, the transcoding rules between its two encodings, and the
//! resolved-path record produced by symlink resolution.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};

/// The encoding carried by a [`PathValue`].
///
/// # Examples
///
/// ```
/// use fpath::{Encoding, PathValue};
///
/// assert_eq!(PathValue::from("/tmp").encoding(), Encoding::Text);
/// assert_eq!(PathValue::from(&b"/tmp"[..]).encoding(), Encoding::Bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Raw bytes; any byte except NUL is allowed.
    Bytes,
    /// UTF-8 text.
    Text,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes => write!(f, "bytes"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// A path in one of two encodings.
///
/// Text paths are always valid UTF-8. Byte paths may hold arbitrary bytes and
/// are never reinterpreted: every operation hands them back bit-for-bit.
///
/// Transcoding: [`encode`](Self::encode) turns text into its UTF-8 bytes and
/// cannot fail; [`decode`](Self::decode) is strict UTF-8 and reports an
/// [`Error::EncodingViolation`] instead of substituting replacement
/// characters.
///
/// # Examples
///
/// ```
/// use fpath::PathValue;
///
/// let text = PathValue::from("/srv/données");
/// let bytes = text.encode();
/// assert_eq!(bytes.as_bytes(), "/srv/données".as_bytes());
/// assert_eq!(bytes.decode().unwrap(), text);
///
/// let raw = PathValue::from(&b"/srv/\xe9t\xe9"[..]);
/// assert!(raw.decode().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathValue {
    /// A byte path.
    Bytes(Vec<u8>),
    /// A text path.
    Text(String),
}

impl PathValue {
    /// Get the encoding tag.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        match self {
            Self::Bytes(_) => Encoding::Bytes,
            Self::Text(_) => Encoding::Text,
        }
    }

    /// View the path as bytes, whatever its tag.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.as_bytes(),
        }
    }

    /// View a text path as `&str`. Byte paths return `None` even when their
    /// content happens to be valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bytes(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Check whether the path is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Consume the path and return its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.into_bytes(),
        }
    }

    /// Transcode to the byte encoding.
    #[must_use]
    pub fn encode(&self) -> PathValue {
        Self::Bytes(self.as_bytes().to_vec())
    }

    /// Transcode to the text encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingViolation`] if the bytes are not valid UTF-8.
    pub fn decode(&self) -> Result<PathValue> {
        match self {
            Self::Text(_) => Ok(self.clone()),
            Self::Bytes(bytes) => Self::from_encoded(Encoding::Text, bytes.clone()),
        }
    }

    /// Build a path with the given encoding from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingViolation`] if `encoding` is text and the
    /// bytes are not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpath::{Encoding, PathValue};
    ///
    /// let path = PathValue::from_encoded(Encoding::Text, b"/tmp".to_vec()).unwrap();
    /// assert_eq!(path, "/tmp");
    /// ```
    pub fn from_encoded(encoding: Encoding, bytes: Vec<u8>) -> Result<PathValue> {
        match encoding {
            Encoding::Bytes => Ok(Self::Bytes(bytes)),
            Encoding::Text => String::from_utf8(bytes).map(Self::Text).map_err(|e| {
                let valid_up_to = e.utf8_error().valid_up_to();
                Error::EncodingViolation {
                    path: Self::Bytes(e.into_bytes()),
                    reason: format!("not valid UTF-8 after byte {valid_up_to}"),
                }
            }),
        }
    }

    /// Wrap engine output in this path's encoding.
    pub(crate) fn rewrap(&self, bytes: Vec<u8>) -> Result<PathValue> {
        Self::from_encoded(self.encoding(), bytes)
    }

    /// Reject embedded NUL bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingViolation`] naming the NUL position.
    pub fn ensure_no_nul(&self) -> Result<()> {
        match self.as_bytes().iter().position(|&b| b == 0) {
            Some(index) => Err(Error::EncodingViolation {
                path: self.clone(),
                reason: format!("embedded NUL byte at offset {index}"),
            }),
            None => Ok(()),
        }
    }

    /// Render the path for humans, replacing undecodable bytes.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }

    /// Convert to a `PathBuf` without any loss.
    #[cfg(unix)]
    #[must_use]
    pub fn to_path_buf(&self) -> std::path::PathBuf {
        use std::os::unix::ffi::OsStrExt;

        std::path::PathBuf::from(std::ffi::OsStr::from_bytes(self.as_bytes()))
    }
}

/// Validate the arguments of one call before any work starts.
///
/// Every argument must carry the primary argument's encoding, and none may
/// contain NUL.
pub(crate) fn check_arguments<'a, I>(primary: &PathValue, others: I) -> Result<()>
where
    I: IntoIterator<Item = &'a PathValue>,
{
    primary.ensure_no_nul()?;
    for other in others {
        if other.encoding() != primary.encoding() {
            return Err(Error::InvalidArgument {
                reason: format!(
                    "can't mix {} and {} paths in one call",
                    primary.encoding(),
                    other.encoding()
                ),
            });
        }
        other.ensure_no_nul()?;
    }
    Ok(())
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl Default for PathValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for PathValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PathValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for PathValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<&[u8]> for PathValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for PathValue {
    fn from(value: &[u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for PathValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&PathValue> for PathValue {
    fn from(value: &PathValue) -> Self {
        value.clone()
    }
}

#[cfg(unix)]
impl From<&std::ffi::OsStr> for PathValue {
    fn from(value: &std::ffi::OsStr) -> Self {
        use std::os::unix::ffi::OsStrExt;

        Self::Bytes(value.as_bytes().to_vec())
    }
}

#[cfg(unix)]
impl From<std::ffi::OsString> for PathValue {
    fn from(value: std::ffi::OsString) -> Self {
        use std::os::unix::ffi::OsStringExt;

        Self::Bytes(value.into_vec())
    }
}

#[cfg(unix)]
impl From<&std::path::Path> for PathValue {
    fn from(value: &std::path::Path) -> Self {
        Self::from(value.as_os_str())
    }
}

#[cfg(unix)]
impl From<std::path::PathBuf> for PathValue {
    fn from(value: std::path::PathBuf) -> Self {
        Self::from(value.into_os_string())
    }
}

impl PartialEq<str> for PathValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for PathValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<[u8]> for PathValue {
    fn eq(&self, other: &[u8]) -> bool {
        matches!(self, Self::Bytes(bytes) if bytes.as_slice() == other)
    }
}

impl PartialEq<&[u8]> for PathValue {
    fn eq(&self, other: &&[u8]) -> bool {
        self == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for PathValue {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self == &other[..]
    }
}

/// A fully resolved path with metadata about the resolution process.
///
/// The path is absolute, contains no `.` or `..` components and no symbolic
/// links (up to the first component that did not exist). It only comes out
/// of [`PathEngine::resolve`](crate::PathEngine::resolve).
///
/// # Examples
///
/// ```
/// use fpath::context::memory::{FixedCurrentDir, MemoryFileSystem};
/// use fpath::PathEngine;
///
/// let fs = MemoryFileSystem::new()
///     .with_dir("/data/v2")
///     .with_symlink("/data/current", "v2");
/// let engine = PathEngine::new()
///     .with_current_dir(FixedCurrentDir::new("/"))
///     .with_filesystem(fs);
///
/// let resolved = engine.resolve("/data/current/file").unwrap();
/// assert_eq!(resolved.path(), &"/data/v2/file");
/// assert_eq!(resolved.original(), &"/data/current/file");
/// assert_eq!(resolved.hops(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    /// The canonical path, in the encoding of the original.
    path: PathValue,
    /// The path as given by the caller.
    original: PathValue,
    /// Number of symlink substitutions performed.
    hops: usize,
}

impl ResolvedPath {
    pub(crate) fn new(path: PathValue, original: PathValue, hops: usize) -> Self {
        Self {
            path,
            original,
            hops,
        }
    }

    /// Get the resolved path.
    #[must_use]
    pub fn path(&self) -> &PathValue {
        &self.path
    }

    /// Get the path as it was given before resolution.
    #[must_use]
    pub fn original(&self) -> &PathValue {
        &self.original
    }

    /// Get the number of symlink hops taken.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.hops
    }

    /// Check whether any symbolic link was followed.
    #[must_use]
    pub fn followed_symlinks(&self) -> bool {
        self.hops > 0
    }

    /// Convert into the resolved path.
    #[must_use]
    pub fn into_path_value(self) -> PathValue {
        self.path
    }
}
