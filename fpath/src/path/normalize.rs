//! Lexical normalization.
//!
//! Normalization never touches the filesystem, so `a/link/..` becomes `a`
//! even when `link` is a symbolic link. Use the resolver when the physical
//! answer matters.

use crate::path::segment::{segment, Segment, SegmentedPath};
use crate::path::CURDIR;

/// Remove `.` components and fold `..` into the name before it.
///
/// A `..` with no name to consume is kept in a relative path and dropped at
/// an absolute root. An empty relative result becomes a lone `.`. Root kind
/// and trailing-separator flag pass through unchanged.
#[must_use]
pub fn normalize(path: SegmentedPath<'_>) -> SegmentedPath<'_> {
    let absolute = path.is_absolute();
    let mut kept: Vec<Segment<'_>> = Vec::with_capacity(path.segments().len());

    for &seg in path.segments() {
        match seg {
            Segment::CurrentDir => {}
            Segment::ParentDir => match kept.last() {
                Some(Segment::Name(_)) => {
                    kept.pop();
                }
                _ if absolute => {}
                _ => kept.push(Segment::ParentDir),
            },
            Segment::Name(_) => kept.push(seg),
        }
    }

    if !absolute && kept.is_empty() {
        kept.push(Segment::CurrentDir);
    }

    SegmentedPath::new(path.root(), kept, path.has_trailing_separator())
}

/// Normalize a raw path and render the result.
///
/// # Examples
///
/// ```
/// use fpath::path::normalize::normpath_bytes;
///
/// assert_eq!(normpath_bytes(b"/a/./b/../c"), b"/a/c");
/// assert_eq!(normpath_bytes(b"/.."), b"/");
/// assert_eq!(normpath_bytes(b"a/b/"), b"a/b/");
/// assert_eq!(normpath_bytes(b""), b".");
/// ```
#[must_use]
pub fn normpath_bytes(raw: &[u8]) -> Vec<u8> {
    if raw.is_empty() {
        return CURDIR.to_vec();
    }
    normalize(segment(raw)).to_bytes()
}
