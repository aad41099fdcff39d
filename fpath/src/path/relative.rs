//! Relative path computation.

use crate::path::absolute::abspath_bytes;
use crate::path::{CURDIR, PARDIR, SEP};

/// Compute the path of `target` relative to `start`.
///
/// Both are absolutized lexically against `cwd` first; an empty `start`
/// means `cwd`. Components are compared byte for byte, so the comparison
/// is case-sensitive. Callers reject an empty `target` before getting here.
///
/// # Examples
///
/// ```
/// use fpath::path::relative::relpath_bytes;
///
/// assert_eq!(relpath_bytes(b"/a/b/c", b"/a/x/y", b"/"), b"../../b/c");
/// assert_eq!(relpath_bytes(b"src/lib.rs", b"", b"/proj"), b"src/lib.rs");
/// assert_eq!(relpath_bytes(b"/a", b"/a/", b"/"), b".");
/// ```
#[must_use]
pub fn relpath_bytes(target: &[u8], start: &[u8], cwd: &[u8]) -> Vec<u8> {
    let target_abs = abspath_bytes(target, cwd);
    let start_abs = abspath_bytes(start, cwd);
    let target_parts = components(&target_abs);
    let start_parts = components(&start_abs);

    let common = target_parts
        .iter()
        .zip(&start_parts)
        .take_while(|(t, s)| t == s)
        .count();

    let parts: Vec<&[u8]> = std::iter::repeat(PARDIR)
        .take(start_parts.len() - common)
        .chain(target_parts[common..].iter().copied())
        .collect();

    if parts.is_empty() {
        return CURDIR.to_vec();
    }
    parts.join(&SEP)
}

fn components(path: &[u8]) -> Vec<&[u8]> {
    path.split(|&b| b == SEP)
        .filter(|component| !component.is_empty())
        .collect()
}
