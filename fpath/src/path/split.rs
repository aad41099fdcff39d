//! Head/tail and root/extension splitting.
//!
//! All functions here borrow from their input and never fail.

use crate::path::{EXTSEP, SEP};

/// Split a path into `(head, tail)` at the last separator.
///
/// The tail never contains a separator. Trailing separators are stripped
/// from the head unless it consists of nothing but separators.
///
/// # Examples
///
/// ```
/// use fpath::path::split::split_bytes;
///
/// assert_eq!(split_bytes(b"/a/b/c.txt"), (&b"/a/b"[..], &b"c.txt"[..]));
/// assert_eq!(split_bytes(b"//x"), (&b"//"[..], &b"x"[..]));
/// assert_eq!(split_bytes(b"name"), (&b""[..], &b"name"[..]));
/// ```
#[must_use]
pub fn split_bytes(raw: &[u8]) -> (&[u8], &[u8]) {
    let cut = tail_start(raw);
    let (head, tail) = raw.split_at(cut);
    if head.iter().all(|&b| b == SEP) {
        return (head, tail);
    }
    let end = head
        .iter()
        .rposition(|&b| b != SEP)
        .map_or(0, |last| last + 1);
    (&head[..end], tail)
}

/// The final component, i.e. the tail of [`split_bytes`].
#[must_use]
pub fn basename_bytes(raw: &[u8]) -> &[u8] {
    &raw[tail_start(raw)..]
}

/// Everything before the final component, i.e. the head of [`split_bytes`].
#[must_use]
pub fn dirname_bytes(raw: &[u8]) -> &[u8] {
    split_bytes(raw).0
}

/// Split a path into `(root, ext)` so that `root + ext == raw`.
///
/// The extension starts at the last `.` of the final component. Dots that
/// lead the final component are part of the name, so `.bashrc` has no
/// extension while `..tar.gz` has `.gz`.
///
/// # Examples
///
/// ```
/// use fpath::path::split::splitext_bytes;
///
/// assert_eq!(splitext_bytes(b"c.txt"), (&b"c"[..], &b".txt"[..]));
/// assert_eq!(splitext_bytes(b"/home/.bashrc"), (&b"/home/.bashrc"[..], &b""[..]));
/// assert_eq!(splitext_bytes(b"a.d/file"), (&b"a.d/file"[..], &b""[..]));
/// ```
#[must_use]
pub fn splitext_bytes(raw: &[u8]) -> (&[u8], &[u8]) {
    let name_start = tail_start(raw);
    let Some(dot) = raw.iter().rposition(|&b| b == EXTSEP) else {
        return (raw, b"");
    };
    if dot < name_start || raw[name_start..dot].iter().all(|&b| b == EXTSEP) {
        return (raw, b"");
    }
    raw.split_at(dot)
}

fn tail_start(raw: &[u8]) -> usize {
    raw.iter().rposition(|&b| b == SEP).map_or(0, |i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_strips_trailing_separators_from_head() {
        assert_eq!(split_bytes(b"a//b"), (&b"a"[..], &b"b"[..]));
        assert_eq!(split_bytes(b"/a///"), (&b"/a"[..], &b""[..]));
    }

    #[test]
    fn test_split_keeps_all_separator_head() {
        assert_eq!(split_bytes(b"/"), (&b"/"[..], &b""[..]));
        assert_eq!(split_bytes(b"///a"), (&b"///"[..], &b"a"[..]));
        assert_eq!(split_bytes(b""), (&b""[..], &b""[..]));
    }

    #[test]
    fn test_basename_and_dirname() {
        assert_eq!(basename_bytes(b"/usr/lib/"), b"");
        assert_eq!(basename_bytes(b"/usr/lib"), b"lib");
        assert_eq!(dirname_bytes(b"/usr/lib"), b"/usr");
        assert_eq!(dirname_bytes(b"lib"), b"");
    }

    #[test]
    fn test_splitext_leading_dots() {
        assert_eq!(splitext_bytes(b"..."), (&b"..."[..], &b""[..]));
        assert_eq!(splitext_bytes(b"..tar.gz"), (&b"..tar"[..], &b".gz"[..]));
        assert_eq!(splitext_bytes(b"dir/.x.y"), (&b"dir/.x"[..], &b".y"[..]));
    }

    #[test]
    fn test_splitext_trailing_dot() {
        assert_eq!(splitext_bytes(b"file."), (&b"file"[..], &b"."[..]));
        assert_eq!(splitext_bytes(b"a.b.c"), (&b"a.b"[..], &b".c"[..]));
    }

    #[test]
    fn test_splitext_preserves_non_utf8() {
        assert_eq!(
            splitext_bytes(b"/t/\xff.\xfe"),
            (&b"/t/\xff"[..], &b".\xfe"[..])
        );
    }
}
