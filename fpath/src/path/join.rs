//! Textual path joining.

use crate::path::segment::is_absolute;
use crate::path::SEP;

/// Join `base` with each fragment in turn.
///
/// An absolute fragment replaces everything accumulated so far. Otherwise
/// the fragment is appended after a single `/`, which is left out when the
/// accumulation is empty or already ends with one. Nothing is normalized.
///
/// # Examples
///
/// ```
/// use fpath::path::join::join_bytes;
///
/// assert_eq!(join_bytes(b"/a/b", [&b"c"[..], b"/d/e"]), b"/d/e");
/// assert_eq!(join_bytes(b"a/", [&b"b"[..]]), b"a/b");
/// assert_eq!(join_bytes(b"", [&b"b"[..], b""]), b"b/");
/// ```
#[must_use]
pub fn join_bytes<'a, I>(base: &[u8], fragments: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut acc = base.to_vec();
    for fragment in fragments {
        if is_absolute(fragment) {
            acc.clear();
        } else if !acc.is_empty() && acc.last() != Some(&SEP) {
            acc.push(SEP);
        }
        acc.extend_from_slice(fragment);
    }
    acc
}
