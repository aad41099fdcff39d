//! Lexical absolutization against a working directory.

use crate::path::join::join_bytes;
use crate::path::normalize::normpath_bytes;
use crate::path::segment::is_absolute;

/// Make `raw` absolute against `cwd`, then normalize it.
///
/// An absolute `raw` ignores `cwd`. An empty `raw` names the working
/// directory itself.
///
/// # Examples
///
/// ```
/// use fpath::path::absolute::abspath_bytes;
///
/// assert_eq!(abspath_bytes(b"../lib", b"/usr/bin"), b"/usr/lib");
/// assert_eq!(abspath_bytes(b"/etc/./hosts", b"/ignored"), b"/etc/hosts");
/// assert_eq!(abspath_bytes(b"", b"/home/user/"), b"/home/user/");
/// ```
#[must_use]
pub fn abspath_bytes(raw: &[u8], cwd: &[u8]) -> Vec<u8> {
    if is_absolute(raw) {
        normpath_bytes(raw)
    } else if raw.is_empty() {
        normpath_bytes(cwd)
    } else {
        normpath_bytes(&join_bytes(cwd, [raw]))
    }
}
